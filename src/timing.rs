//! Slideshow timing.
//!
//! Each slideshow has a [`TimingPolicy`] for how long every picture stays on
//! screen and a single transition duration shared by all crossfades. Both
//! are asked for once per directory.
//!
//! Random durations are drawn per `<static>` tag as
//! `min + (max - min) * u` with `u` uniform in `[0, 1)`. The bounds are not
//! validated: an inverted or negative range produces whatever that formula
//! gives.

use crate::prompt::{PromptError, Prompter};
use rand::Rng;
use std::io::{BufRead, Write};

/// How long each picture is displayed, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimingPolicy {
    /// A fresh draw from `[min, max)` for every picture.
    Random { min: f64, max: f64 },
    /// The same duration for every picture.
    Fixed(f64),
}

impl TimingPolicy {
    /// Duration for the next picture.
    pub fn next_duration<R: Rng>(&self, rng: &mut R) -> f64 {
        match *self {
            TimingPolicy::Random { min, max } => min + (max - min) * rng.random::<f64>(),
            TimingPolicy::Fixed(seconds) => seconds,
        }
    }
}

/// Timing for one slideshow document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideshowTiming {
    pub policy: TimingPolicy,
    /// Crossfade duration in seconds, shared by every transition.
    pub transition: f64,
}

#[derive(Clone, Copy)]
enum IntervalMode {
    Random,
    Fixed,
}

/// Ask for the interval mode, its value(s), and the transition duration.
pub fn ask_timing<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<SlideshowTiming, PromptError> {
    prompter.say(&[
        "Please choose an option for wallpaper time:",
        "    1. Random interval",
        "    2. Fixed interval",
    ])?;
    let mode = prompter.ask_choice(
        "Enter option: ",
        &[("1", IntervalMode::Random), ("2", IntervalMode::Fixed)],
    )?;

    let policy = match mode {
        IntervalMode::Random => {
            let min = prompter
                .ask_number("Enter minimum interval (in seconds, with or without decimal): ")?;
            let max = prompter
                .ask_number("Enter maximum interval (in seconds, with or without decimal): ")?;
            TimingPolicy::Random { min, max }
        }
        IntervalMode::Fixed => TimingPolicy::Fixed(
            prompter.ask_number("Enter fixed interval (in seconds, with or without decimal): ")?,
        ),
    };

    let transition = prompter.ask_number(
        "Enter transition time (in seconds, with or without decimal, 1-5s is recommended): ",
    )?;

    Ok(SlideshowTiming { policy, transition })
}
