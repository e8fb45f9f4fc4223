//! Startup flag parsing.

use std::ops::BitOr;

/// Bitset of startup options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AppFlags(u32);

impl AppFlags {
    pub const DEFAULT: AppFlags = AppFlags(0);
    pub const NO_LOG: AppFlags = AppFlags(1);

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: AppFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: AppFlags) {
        self.0 |= other.0;
    }
}

impl BitOr for AppFlags {
    type Output = AppFlags;

    fn bitor(self, rhs: AppFlags) -> AppFlags {
        AppFlags(self.0 | rhs.0)
    }
}

/// Scans process arguments, skipping the executable path in position 0.
///
/// Flags start with `-` and are matched case-insensitively. Anything not
/// recognized is ignored.
pub fn parse_args<I, S>(args: I) -> AppFlags
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut flags = AppFlags::DEFAULT;
    for arg in args.into_iter().skip(1) {
        let Some(key) = arg.as_ref().strip_prefix('-') else {
            continue;
        };
        match key.to_lowercase().as_str() {
            "nolog" | "nologg" => flags.insert(AppFlags::NO_LOG),
            _ => log::debug!("Ignoring unrecognized flag: -{}", key),
        }
    }
    flags
}

/// Parses the command line of the running process.
pub fn from_env() -> AppFlags {
    parse_args(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_keep_defaults() {
        assert_eq!(parse_args(["speed_guru.exe"]), AppFlags::DEFAULT);
        assert_eq!(parse_args(Vec::<String>::new()), AppFlags::DEFAULT);
    }

    #[test]
    fn nolog_in_any_case_sets_flag() {
        for flag in ["-nolog", "-NOLOG", "-NoLogg", "-nologg"] {
            let flags = parse_args(["app", flag]);
            assert!(flags.contains(AppFlags::NO_LOG), "{flag}");
        }
    }

    #[test]
    fn executable_path_is_never_a_flag() {
        assert_eq!(parse_args(["-nolog"]), AppFlags::DEFAULT);
    }

    #[test]
    fn unknown_and_bare_arguments_are_ignored() {
        let flags = parse_args(["app", "nolog", "-verbose", "", "-", "--nolog"]);
        assert_eq!(flags, AppFlags::DEFAULT);
    }

    #[test]
    fn flags_combine() {
        let flags = AppFlags::DEFAULT | AppFlags::NO_LOG;
        assert_eq!(flags.bits(), 1);
        assert!(flags.contains(AppFlags::DEFAULT));
    }
}
