// src/assets/frame_files.rs
//
// The on-disk layout of animation frames:
// <texture_root>/animations/<character>/<animation>NNNN.png
// where NNNN is a 4-digit, 1-based, zero-padded frame index with no gaps.

use std::path::{Path, PathBuf};

pub const ANIMATIONS_DIR: &str = "animations";

/// Folder holding every animation of one character.
pub fn animation_folder(texture_root: &Path, character: &str) -> PathBuf {
    texture_root.join(ANIMATIONS_DIR).join(character)
}

/// File name of one frame, e.g. ("walk", 3) -> "walk0003.png".
pub fn frame_file_name(animation: &str, frame: u32) -> String {
    format!("{}{:04}.png", animation, frame)
}

/// Animation name encoded in a frame file name, e.g. "walk0001.png" -> "walk".
/// Files that don't follow the frame naming convention yield None.
pub fn animation_name(file_name: &str) -> Option<String> {
    let re = regex::Regex::new(r"^(.+)\d{4}\.png$").ok()?;
    let captures = re.captures(file_name)?;
    Some(captures.get(1)?.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_file_name_is_zero_padded() {
        assert_eq!(frame_file_name("walk", 1), "walk0001.png");
        assert_eq!(frame_file_name("walk", 12), "walk0012.png");
        assert_eq!(frame_file_name("jump_high", 9999), "jump_high9999.png");
    }

    #[test]
    fn test_animation_name_strips_index_and_extension() {
        assert_eq!(animation_name("walk0001.png"), Some("walk".to_string()));
        assert_eq!(animation_name("idle0031.png"), Some("idle".to_string()));
        assert_eq!(
            animation_name("jump_high0002.png"),
            Some("jump_high".to_string())
        );
    }

    #[test]
    fn test_animation_name_rejects_non_frame_files() {
        assert_eq!(animation_name("readme.txt"), None);
        assert_eq!(animation_name("walk001.png"), None);
        assert_eq!(animation_name("walk0001.jpg"), None);
        assert_eq!(animation_name("0001.png"), None);
    }

    #[test]
    fn test_animation_folder_layout() {
        let folder = animation_folder(Path::new("textures"), "hero");
        assert_eq!(folder, PathBuf::from("textures/animations/hero"));
    }
}
