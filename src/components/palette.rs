use egui::Color32;

pub const GREEN_50: Color32 = Color32::from_rgb(240, 253, 244);
pub const GREEN_100: Color32 = Color32::from_rgb(220, 252, 231);
pub const GREEN_200: Color32 = Color32::from_rgb(187, 247, 208);
pub const GREEN_500: Color32 = Color32::from_rgb(34, 197, 94);
pub const GREEN_600: Color32 = Color32::from_rgb(22, 163, 74);
pub const GREEN_700: Color32 = Color32::from_rgb(21, 128, 61);
pub const GREEN_800: Color32 = Color32::from_rgb(22, 101, 52);
pub const RED_100: Color32 = Color32::from_rgb(254, 226, 226);
pub const RED_600: Color32 = Color32::from_rgb(220, 38, 38);
pub const RED_700: Color32 = Color32::from_rgb(185, 28, 28);
pub const GRAY_500: Color32 = Color32::from_rgb(107, 114, 128);
pub const GRAY_700: Color32 = Color32::from_rgb(55, 65, 81);
