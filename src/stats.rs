use lifers::StepReport;
use std::{
    fmt,
    io::{self, Write},
    path::Path,
    time::Instant,
};

/// Rolling numbers shown on the status line and in headless output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub gens_per_sec: f64,
    pub generation: u64,
    pub alive: usize,
    pub examined: usize,
}
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.02}gen/s gens:{}, alive:{}, examined:{}",
            self.gens_per_sec, self.generation, self.alive, self.examined
        )
    }
}

pub trait Recorder {
    fn record(&mut self, step: StepReport);

    /// Whether enough time passed for a fresh [`Recorder::summary`]
    fn due(&self) -> bool;
    fn summary(&mut self) -> Summary;

    fn generations(&self) -> u64;

    /// Persists whatever the recorder collected
    fn save(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

pub struct RateRecord {
    generation: u64,
    last: StepReport,
    since_summary: u32,
    summarized_at: Instant,
}
impl RateRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            generation: 0,
            last: StepReport {
                examined: 0,
                population: alive,
            },
            since_summary: 0,
            summarized_at: Instant::now(),
        }
    }
}
impl Recorder for RateRecord {
    fn record(&mut self, step: StepReport) {
        self.generation += 1;
        self.since_summary += 1;
        self.last = step;
    }

    fn due(&self) -> bool {
        self.summarized_at.elapsed().as_millis() >= 500
    }
    fn summary(&mut self) -> Summary {
        let elapsed = self.summarized_at.elapsed().as_secs_f64();
        let summary = Summary {
            gens_per_sec: f64::from(self.since_summary) / elapsed.max(f64::EPSILON),
            generation: self.generation,
            alive: self.last.population,
            examined: self.last.examined,
        };
        self.summarized_at = Instant::now();
        self.since_summary = 0;
        summary
    }

    fn generations(&self) -> u64 {
        self.generation
    }
}

/// Wraps another recorder and keeps one timed row per generation
pub struct CsvRecord<R> {
    inner: R,
    rows: Vec<(u128, StepReport)>,
    stepped_at: Instant,
}
impl<R: Recorder> CsvRecord<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            rows: Vec::new(),
            stepped_at: Instant::now(),
        }
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(b"gen,delta_t,alive,examined\n")?;
        for (i, (micros, step)) in self.rows.iter().enumerate() {
            writeln!(out, "{},{},{},{}", i + 1, micros, step.population, step.examined)?;
        }
        out.flush()
    }
}
impl<R: Recorder> Recorder for CsvRecord<R> {
    fn record(&mut self, step: StepReport) {
        let micros = self.stepped_at.elapsed().as_micros();
        self.stepped_at = Instant::now();
        self.rows.push((micros, step));
        self.inner.record(step);
    }

    fn due(&self) -> bool {
        self.inner.due()
    }
    fn summary(&mut self) -> Summary {
        self.inner.summary()
    }

    fn generations(&self) -> u64 {
        self.inner.generations()
    }

    fn save(&self, path: &Path) -> io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_to(io::BufWriter::new(file))
    }
}

/// A recorder that also keeps per-generation rows when `csv` is set
pub fn recorder(alive: usize, csv: bool) -> Box<dyn Recorder> {
    let rate = RateRecord::new(alive);
    if csv {
        Box::new(CsvRecord::new(rate))
    } else {
        Box::new(rate)
    }
}
