/// Input class of a test asset. Decides the mode flag NAeP is started with
/// and which option flags get cycled through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ogg,
    Weem,
    Wisp,
    Bank,
    Auto,
}

impl Category {
    /// All categories, in the order their invocations are emitted.
    pub const ALL: [Category; 5] = [
        Category::Ogg,
        Category::Weem,
        Category::Wisp,
        Category::Bank,
        Category::Auto,
    ];

    /// Mode flag that opens every invocation of this category.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Ogg => "-ogg",
            Self::Weem => "-weem",
            Self::Wisp => "-wisp",
            Self::Bank => "-bank",
            Self::Auto => "-auto",
        }
    }

    /// Bit-to-flag table: `(bit, flag)` pairs, lowest bit first.
    ///
    /// A flag is added to an invocation when `bit` is set in the file's index
    /// within its category. Tables are independent per category.
    pub fn option_table(self) -> &'static [(usize, &'static str)] {
        match self {
            Self::Ogg => &[(1, "-ri")],
            Self::Weem => &[(1, "-oi"), (2, "-r"), (4, "-ri")],
            Self::Wisp => &[(1, "-O"), (2, "-oi"), (4, "-r"), (8, "-ri")],
            Self::Bank | Self::Auto => &[(1, "-R"), (2, "-O"), (4, "-oi"), (8, "-r"), (16, "-ri")],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ogg => "ogg",
            Self::Weem => "wem",
            Self::Wisp => "wsp",
            Self::Bank => "bnk",
            Self::Auto => "auto",
        }
    }
}

/// Classify a file by name.
///
/// Case-insensitive, first match wins: an `unknown` prefix forces `Auto`,
/// then the `.ogg` / `.wem` / `.wsp` / `.bnk` suffixes, anything else is `Auto`.
pub fn classify(file_name: &str) -> Category {
    let name = file_name.to_lowercase();

    if name.starts_with("unknown") {
        Category::Auto
    } else if name.ends_with(".ogg") {
        Category::Ogg
    } else if name.ends_with(".wem") {
        Category::Weem
    } else if name.ends_with(".wsp") {
        Category::Wisp
    } else if name.ends_with(".bnk") {
        Category::Bank
    } else {
        Category::Auto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_pick_category() {
        assert_eq!(classify("a.ogg"), Category::Ogg);
        assert_eq!(classify("b.wem"), Category::Weem);
        assert_eq!(classify("c.wsp"), Category::Wisp);
        assert_eq!(classify("d.bnk"), Category::Bank);
    }

    #[test]
    fn suffix_match_ignores_case() {
        assert_eq!(classify("MUSIC.OGG"), Category::Ogg);
        assert_eq!(classify("Voice.Wem"), Category::Weem);
        assert_eq!(classify("SFX.WSP"), Category::Wisp);
        assert_eq!(classify("Init.BnK"), Category::Bank);
    }

    #[test]
    fn unknown_prefix_beats_suffix() {
        assert_eq!(classify("UNKNOWN_x.bnk"), Category::Auto);
        assert_eq!(classify("unknown.ogg"), Category::Auto);
        assert_eq!(classify("Unknown_0001.wem"), Category::Auto);
    }

    #[test]
    fn unknown_only_counts_as_prefix() {
        assert_eq!(classify("track_unknown.wem"), Category::Weem);
    }

    #[test]
    fn everything_else_is_auto() {
        assert_eq!(classify("readme.txt"), Category::Auto);
        assert_eq!(classify("noextension"), Category::Auto);
        assert_eq!(classify("archive.ogg.bak"), Category::Auto);
        assert_eq!(classify(""), Category::Auto);
    }

    #[test]
    fn bank_and_auto_share_a_table() {
        assert_eq!(Category::Bank.option_table(), Category::Auto.option_table());
        assert_eq!(Category::Bank.option_table().len(), 5);
    }

    #[test]
    fn tables_grow_by_category() {
        let sizes: Vec<usize> = Category::ALL.iter().map(|c| c.option_table().len()).collect();
        assert_eq!(sizes, vec![1, 3, 4, 5, 5]);
    }
}
