use super::{ScreenInsets, WindowFlags, WindowInsets};

#[test]
fn fullscreen_flag_matches_platform_bit() {
	assert_eq!(WindowFlags::FULLSCREEN.bits(), 1024);
}

#[test]
fn status_bar_height_is_zero_in_fullscreen() {
	let insets = WindowInsets::new(WindowFlags::FULLSCREEN, 24.0);
	assert!(insets.is_full_screen());
	assert_eq!(insets.status_bar_height(), 0.0);
	assert_eq!(insets.non_client_height(), 24.0);
}

#[test]
fn flags_can_change_after_construction() {
	let insets = WindowInsets::new(WindowFlags::empty(), 24.0);
	assert_eq!(insets.status_bar_height(), 24.0);

	insets.set_flags(WindowFlags::FULLSCREEN);
	assert!(insets.is_full_screen());
	assert_eq!(insets.flags(), WindowFlags::FULLSCREEN);
}
