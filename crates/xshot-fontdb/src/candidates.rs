// this_file: crates/xshot-fontdb/src/candidates.rs

//! Where each font family is expected to live on each platform
//!
//! The tables are ordered by preference. Style-specific files come first so a
//! bold header finds `DejaVuSans-Bold.ttf` before it settles for the regular
//! weight.

use std::path::PathBuf;

use xshot_core::{FontFamily, FontStyle};

/// Operating systems with their own font locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Platform this binary is running on; anything unfamiliar is treated as Linux
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            _ => Self::Linux,
        }
    }

    /// Directories the platform keeps installed fonts in, with `~` expanded
    pub fn system_font_dirs(&self) -> Vec<PathBuf> {
        let dirs: &[&str] = match self {
            Self::Linux => &[
                "/usr/share/fonts",
                "/usr/local/share/fonts",
                "~/.fonts",
                "~/.local/share/fonts",
            ],
            Self::MacOs => &["/System/Library/Fonts", "/Library/Fonts", "~/Library/Fonts"],
            Self::Windows => &["C:/Windows/Fonts"],
        };

        dirs.iter()
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).into_owned()))
            .collect()
    }
}

/// File name of the font XShot ships for a family
pub fn bundled_file(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Mono => "JetBrains Mono Medium Nerd Font Complete.ttf",
        FontFamily::Sans => "Inter-Regular.ttf",
        FontFamily::Serif => "PlayfairDisplay-Regular.ttf",
        FontFamily::Modern => "Poppins-Regular.ttf",
        FontFamily::Classic => "SourceSerif-Regular.ttf",
        FontFamily::Minimal => "IBMPlexSans-Regular.ttf",
    }
}

/// Bundled file names to try, styled variant first
///
/// Bundled families follow the `Name-Regular.ttf` convention, so the styled
/// variant is derived by swapping the suffix.
pub fn bundled_files(family: FontFamily, style: FontStyle) -> Vec<String> {
    let regular = bundled_file(family);
    let mut files = Vec::with_capacity(2);

    if let (Some(stem), Some(suffix)) = (regular.strip_suffix("-Regular.ttf"), style_suffix(style)) {
        files.push(format!("{stem}-{suffix}.ttf"));
    }
    files.push(regular.to_string());
    files
}

fn style_suffix(style: FontStyle) -> Option<&'static str> {
    match style {
        FontStyle::Normal => None,
        FontStyle::Bold => Some("Bold"),
        FontStyle::Italic => Some("Italic"),
        FontStyle::BoldItalic => Some("BoldItalic"),
    }
}

/// Installed-font paths for a family on a platform, styled files first
pub fn platform_candidates(
    family: FontFamily,
    style: FontStyle,
    platform: Platform,
) -> Vec<&'static str> {
    let mut paths = Vec::new();
    if style != FontStyle::Normal {
        paths.extend_from_slice(styled_table(family, style, platform));
    }
    paths.extend_from_slice(regular_table(family, platform));
    paths
}

/// Bare file names worth looking for when scanning font directories
pub fn scan_names(family: FontFamily, style: FontStyle, platform: Platform) -> Vec<String> {
    let mut names = bundled_files(family, style);
    for path in platform_candidates(family, style, platform) {
        if let Some(name) = path.rsplit('/').next() {
            if !names.iter().any(|known| known == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}

fn regular_table(family: FontFamily, platform: Platform) -> &'static [&'static str] {
    use FontFamily::*;
    use Platform::*;

    match (family, platform) {
        (Mono, Linux) => &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
            "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
        ],
        (Mono, MacOs) => &[
            "/System/Library/Fonts/Monaco.ttf",
            "/System/Library/Fonts/Menlo.ttc",
            "/Library/Fonts/JetBrainsMono-Regular.ttf",
        ],
        (Mono, Windows) => &["C:/Windows/Fonts/consola.ttf"],
        (Sans, Linux) => &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
        ],
        (Sans, MacOs) => &[
            "/System/Library/Fonts/Helvetica.ttc",
            "/Library/Fonts/Inter-Regular.ttf",
        ],
        (Sans, Windows) => &["C:/Windows/Fonts/arial.ttf"],
        (Serif, Linux) => &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
            "/usr/share/fonts/TTF/DejaVuSerif.ttf",
        ],
        (Serif, MacOs) => &[
            "/System/Library/Fonts/Times.ttc",
            "/Library/Fonts/PlayfairDisplay-Regular.ttf",
        ],
        (Serif, Windows) => &["C:/Windows/Fonts/times.ttf"],
        // Only ever shipped with XShot itself
        (Modern | Classic | Minimal, _) => &[],
    }
}

fn styled_table(family: FontFamily, style: FontStyle, platform: Platform) -> &'static [&'static str] {
    use FontFamily::*;
    use FontStyle::*;
    use Platform::*;

    match (family, platform, style) {
        (_, _, Normal) => &[],
        (Mono, Linux, Bold) => &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationMono-Bold.ttf",
        ],
        (Mono, Linux, Italic) => &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Oblique.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationMono-Italic.ttf",
        ],
        (Mono, Linux, BoldItalic) => &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-BoldOblique.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationMono-BoldItalic.ttf",
        ],
        (Mono, MacOs, Bold) => &["/Library/Fonts/JetBrainsMono-Bold.ttf"],
        (Mono, MacOs, Italic) => &["/Library/Fonts/JetBrainsMono-Italic.ttf"],
        (Mono, MacOs, BoldItalic) => &["/Library/Fonts/JetBrainsMono-BoldItalic.ttf"],
        (Mono, Windows, Bold) => &["C:/Windows/Fonts/consolab.ttf"],
        (Mono, Windows, Italic) => &["C:/Windows/Fonts/consolai.ttf"],
        (Mono, Windows, BoldItalic) => &["C:/Windows/Fonts/consolaz.ttf"],
        (Sans, Linux, Bold) => &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
            "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        ],
        (Sans, Linux, Italic) => &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-Oblique.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Italic.ttf",
        ],
        (Sans, Linux, BoldItalic) => &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-BoldOblique.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-BoldItalic.ttf",
        ],
        (Sans, MacOs, Bold) => &[
            "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
            "/Library/Fonts/Inter-Bold.ttf",
        ],
        (Sans, MacOs, Italic) => &["/System/Library/Fonts/Supplemental/Arial Italic.ttf"],
        (Sans, MacOs, BoldItalic) => &["/System/Library/Fonts/Supplemental/Arial Bold Italic.ttf"],
        (Sans, Windows, Bold) => &["C:/Windows/Fonts/arialbd.ttf"],
        (Sans, Windows, Italic) => &["C:/Windows/Fonts/ariali.ttf"],
        (Sans, Windows, BoldItalic) => &["C:/Windows/Fonts/arialbi.ttf"],
        (Serif, Linux, Bold) => &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Bold.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSerif-Bold.ttf",
        ],
        (Serif, Linux, Italic) => &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Italic.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSerif-Italic.ttf",
        ],
        (Serif, Linux, BoldItalic) => &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSerif-BoldItalic.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSerif-BoldItalic.ttf",
        ],
        (Serif, MacOs, Bold) => &["/System/Library/Fonts/Supplemental/Times New Roman Bold.ttf"],
        (Serif, MacOs, Italic) => &["/System/Library/Fonts/Supplemental/Times New Roman Italic.ttf"],
        (Serif, MacOs, BoldItalic) => {
            &["/System/Library/Fonts/Supplemental/Times New Roman Bold Italic.ttf"]
        },
        (Serif, Windows, Bold) => &["C:/Windows/Fonts/timesbd.ttf"],
        (Serif, Windows, Italic) => &["C:/Windows/Fonts/timesi.ttf"],
        (Serif, Windows, BoldItalic) => &["C:/Windows/Fonts/timesbi.ttf"],
        (Modern | Classic | Minimal, _, _) => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_files_come_first() {
        let paths = platform_candidates(FontFamily::Sans, FontStyle::Bold, Platform::Linux);
        assert!(paths[0].ends_with("DejaVuSans-Bold.ttf"));
        assert!(paths.iter().any(|p| p.ends_with("/DejaVuSans.ttf")));

        let bold_pos = paths.iter().position(|p| p.ends_with("LiberationSans-Bold.ttf"));
        let regular_pos = paths.iter().position(|p| p.ends_with("LiberationSans-Regular.ttf"));
        assert!(bold_pos < regular_pos);
    }

    #[test]
    fn test_normal_style_uses_regular_table_only() {
        let paths = platform_candidates(FontFamily::Mono, FontStyle::Normal, Platform::Windows);
        assert_eq!(paths, vec!["C:/Windows/Fonts/consola.ttf"]);
    }

    #[test]
    fn test_bundled_variants() {
        assert_eq!(
            bundled_files(FontFamily::Sans, FontStyle::Bold),
            vec!["Inter-Bold.ttf".to_string(), "Inter-Regular.ttf".to_string()]
        );
        // The Nerd Font file has no -Regular suffix to swap
        assert_eq!(bundled_files(FontFamily::Mono, FontStyle::Italic).len(), 1);
    }

    #[test]
    fn test_bundled_only_families_have_no_system_paths() {
        for platform in [Platform::Linux, Platform::MacOs, Platform::Windows] {
            assert!(platform_candidates(FontFamily::Modern, FontStyle::Bold, platform).is_empty());
        }
        let names = scan_names(FontFamily::Modern, FontStyle::Normal, Platform::Linux);
        assert_eq!(names, vec!["Poppins-Regular.ttf".to_string()]);
    }

    #[test]
    fn test_scan_names_are_bare_and_unique() {
        let names = scan_names(FontFamily::Sans, FontStyle::Normal, Platform::Linux);
        assert!(names.iter().all(|n| !n.contains('/')));
        // DejaVuSans.ttf appears under two directories in the table
        assert_eq!(names.iter().filter(|n| *n == "DejaVuSans.ttf").count(), 1);
    }
}
