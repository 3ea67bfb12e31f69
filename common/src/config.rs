/// Run options, built once from the command line and passed down by reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Skips the banner at start-up.
    pub no_banner: bool,
    /// Verbosity reduction.
    ///
    /// * `0` prints everything.
    /// * `1` drops the banner and section headers.
    /// * `2` also drops summaries, leaving only result lines.
    pub quiet: u8,
}

impl Config {
    pub fn show_banner(&self) -> bool {
        !self.no_banner && self.quiet == 0
    }

    pub fn show_headers(&self) -> bool {
        self.quiet == 0
    }

    pub fn show_summary(&self) -> bool {
        self.quiet < 2
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_shows_everything() {
        let cfg = Config::default();
        assert!(cfg.show_banner());
        assert!(cfg.show_headers());
        assert!(cfg.show_summary());
    }

    #[test]
    fn no_banner_only_hides_banner() {
        let cfg = Config { no_banner: true, quiet: 0 };
        assert!(!cfg.show_banner());
        assert!(cfg.show_headers());
        assert!(cfg.show_summary());
    }

    #[test]
    fn quiet_one_keeps_summary() {
        let cfg = Config { no_banner: false, quiet: 1 };
        assert!(!cfg.show_banner());
        assert!(!cfg.show_headers());
        assert!(cfg.show_summary());
    }

    #[test]
    fn quiet_two_hides_summary() {
        let cfg = Config { no_banner: false, quiet: 2 };
        assert!(!cfg.show_summary());
    }
}
