use lifers::{Error, Result, Settings, pattern::Seed, render::ColorScheme};
use std::{path::PathBuf, str::FromStr, time::Duration};

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("", "headless", "run without a terminal UI");
        opts.optflag("", "paused", "start paused");
        opts.optflag("", "print", "print the final board when headless");
        opts.optflag("t", "threads", "enables multi-threading");
        opts.optopt("i", "input", "seed from a run-length encoded file", "FILE");
        opts.optopt(
            "p",
            "pattern",
            "seed pattern: glider, blinker, block, random, alternating, empty",
            "NAME",
        );
        opts.optopt("w", "width", "set fill width", "WIDTH");
        opts.optopt("h", "height", "set fill height", "HEIGHT");
        opts.optopt("s", "scale", "cell edge length in terminal cells", "N");
        opts.optopt("", "fps", "generations per second while running", "N");
        opts.optopt("", "paused-fps", "input polls per second while paused", "N");
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");
        opts.optopt("", "log", "write log output to file", "FILE");
        opts
    }

    /// Parses the arguments, or returns [`None`] after printing help
    pub fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifers [options]"));
            return Ok(None);
        }

        let args = Self { matches };
        // surface bad values before the terminal is taken over
        args.seed()?;
        args.settings()?;
        args.generations()?;
        args.fill_size()?;
        Ok(Some(args))
    }
    pub fn from_env() -> Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn parsed<T: FromStr>(&self, option: &'static str) -> Result<Option<T>> {
        self.matches
            .opt_get(option)
            .map_err(|_| Error::InvalidValue {
                option,
                value: self.matches.opt_str(option).unwrap_or_default(),
            })
    }
    fn positive<T>(&self, option: &'static str) -> Result<Option<T>>
    where
        T: FromStr + Default + PartialOrd,
    {
        match self.parsed::<T>(option)? {
            Some(v) if v <= T::default() => Err(Error::InvalidValue {
                option,
                value: self.matches.opt_str(option).unwrap_or_default(),
            }),
            v => Ok(v),
        }
    }

    pub fn headless(&self) -> bool {
        self.matches.opt_present("headless")
    }

    pub fn print_board(&self) -> bool {
        self.matches.opt_present("print")
    }

    pub fn generations(&self) -> Result<u64> {
        // kinda hacky way of saying "infinity"
        Ok(self.parsed("gens")?.unwrap_or(u64::MAX))
    }

    pub fn seed(&self) -> Result<Seed> {
        match self.matches.opt_str("pattern") {
            Some(name) => Seed::parse(name),
            None => Ok(Seed::Glider),
        }
    }

    /// Area used by the random and alternating fills
    pub fn fill_size(&self) -> Result<(i64, i64)> {
        let default = if self.headless() {
            (64, 64)
        } else {
            let (cols, rows) = crossterm::terminal::size()?;
            (i64::from(cols), i64::from(rows.saturating_sub(1)))
        };

        Ok((
            self.positive("width")?.unwrap_or(default.0),
            self.positive("height")?.unwrap_or(default.1),
        ))
    }

    pub fn settings(&self) -> Result<Settings> {
        let defaults = Settings::default();
        Ok(Settings {
            scale: self.positive("scale")?.unwrap_or(defaults.scale),
            running_fps: self.positive("fps")?.unwrap_or(defaults.running_fps),
            paused_fps: self.positive("paused-fps")?.unwrap_or(defaults.paused_fps),
            paused: self.matches.opt_present("paused"),
            parallel: self.matches.opt_present("threads"),
            scheme: ColorScheme::default(),
        })
    }

    /// Delay between generations in headless mode, when `--fps` is given
    pub fn headless_sleep(&self) -> Result<Option<Duration>> {
        Ok(self
            .positive::<u32>("fps")?
            .map(|fps| Duration::from_secs(1) / fps))
    }

    pub fn input_file(&self) -> Option<PathBuf> {
        self.matches.opt_str("input").map(PathBuf::from)
    }
    pub fn stats_file(&self) -> Option<PathBuf> {
        self.matches.opt_str("stats").map(PathBuf::from)
    }
    pub fn log_file(&self) -> Option<PathBuf> {
        self.matches.opt_str("log").map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        let mut all = vec!["--headless"];
        all.extend_from_slice(list);
        Args::new(&all).expect("valid args").expect("not help")
    }

    #[test]
    fn defaults() {
        let args = args(&[]);
        let settings = args.settings().unwrap();

        assert_eq!(args.seed().unwrap(), Seed::Glider);
        assert_eq!(args.generations().unwrap(), u64::MAX);
        assert_eq!(args.fill_size().unwrap(), (64, 64));
        assert_eq!(settings.scale, 1);
        assert_eq!(settings.running_fps, 30);
        assert!(!settings.paused);
        assert!(args.headless_sleep().unwrap().is_none());
        assert!(!args.print_board());
    }

    #[test]
    fn print_flag_parses() {
        assert!(args(&["--print", "-g", "4"]).print_board());
    }

    #[test]
    fn pattern_parses() {
        let args = args(&["--pattern", "alternating", "-w", "8", "-h", "4"]);

        assert_eq!(args.seed().unwrap(), Seed::Alternating);
        assert_eq!(args.fill_size().unwrap(), (8, 4));
    }

    #[test]
    fn settings_parse() {
        let args = args(&["-s", "3", "--fps", "10", "--paused", "-t"]);
        let settings = args.settings().unwrap();

        assert_eq!(settings.scale, 3);
        assert_eq!(settings.running_fps, 10);
        assert!(settings.paused);
        assert!(settings.parallel);
        assert_eq!(args.headless_sleep().unwrap(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn unknown_pattern_is_error() {
        let err = Args::new(&["--headless", "-p", "spaceship"]).err();

        assert!(matches!(err, Some(Error::UnknownPattern(_))));
    }

    #[test]
    fn zero_scale_is_error() {
        let err = Args::new(&["--headless", "--scale", "0"]).err();

        assert!(matches!(
            err,
            Some(Error::InvalidValue { option: "scale", .. })
        ));
    }

    #[test]
    fn non_numeric_gens_is_error() {
        let err = Args::new(&["--headless", "-g", "lots"]).err();

        assert!(matches!(err, Some(Error::InvalidValue { option: "gens", .. })));
    }

    #[test]
    fn help_returns_none() {
        assert!(Args::new(&["--help"]).unwrap().is_none());
    }
}
