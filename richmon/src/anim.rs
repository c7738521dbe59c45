//! Clock-seeded animation state. A pure function of hour/minute/second: no counters,
//! no RNG, so the same wall-clock second always yields the same frame.

use chrono::Timelike;

use crate::panel::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub primary: Tone,
    pub secondary: Tone,
    pub accent: Tone,
    pub center: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Primary,
    Secondary,
    Accent,
    Center,
}

impl Palette {
    fn role(&self, r: Role) -> Tone {
        match r {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Accent => self.accent,
            Role::Center => self.center,
        }
    }
}

pub const PALETTES: [Palette; 6] = [
    Palette {
        name: "ocean",
        primary: Tone::Blue,
        secondary: Tone::Cyan,
        accent: Tone::LightCyan,
        center: Tone::White,
    },
    Palette {
        name: "forest",
        primary: Tone::Green,
        secondary: Tone::LightGreen,
        accent: Tone::Yellow,
        center: Tone::White,
    },
    Palette {
        name: "ember",
        primary: Tone::Red,
        secondary: Tone::LightRed,
        accent: Tone::Yellow,
        center: Tone::LightYellow,
    },
    Palette {
        name: "dusk",
        primary: Tone::Magenta,
        secondary: Tone::LightMagenta,
        accent: Tone::LightBlue,
        center: Tone::White,
    },
    Palette {
        name: "steel",
        primary: Tone::DarkGray,
        secondary: Tone::Gray,
        accent: Tone::White,
        center: Tone::LightCyan,
    },
    Palette {
        name: "neon",
        primary: Tone::LightMagenta,
        secondary: Tone::LightCyan,
        accent: Tone::LightGreen,
        center: Tone::LightYellow,
    },
];

pub const SPINNERS: [&[&str]; 6] = [
    &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
    &["◐", "◓", "◑", "◒"],
    &["|", "/", "-", "\\"],
    &["▁", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃"],
    &["◢", "◣", "◤", "◥"],
    &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"],
];

const OUTER_GLYPHS: [&str; 6] = ["○", "◌", "◎", "●", "◎", "◌"];
const CENTER_GLYPHS: [&str; 6] = ["✦", "✧", "★", "☆", "◆", "◇"];

// Brightness rises then falls over six seconds: (ring, outer) roles per phase.
const PULSE: [(Role, Role); 6] = [
    (Role::Primary, Role::Secondary),
    (Role::Secondary, Role::Accent),
    (Role::Accent, Role::Center),
    (Role::Center, Role::Accent),
    (Role::Accent, Role::Secondary),
    (Role::Secondary, Role::Primary),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrame {
    pub palette: Palette,
    pub time_seed: usize,
    pub spinner_glyph: &'static str,
    pub outer_glyph: &'static str,
    pub center_glyph: &'static str,
    pub ring_color: Tone,
    pub outer_color: Tone,
    pub pulse_phase: usize,
}

pub fn frame_at_hms(hour: u32, minute: u32, second: u32) -> AnimationFrame {
    let secs_of_day = (hour as usize) * 3600 + (minute as usize) * 60 + second as usize;
    let time_seed = (secs_of_day / 10) % PALETTES.len();
    let palette = PALETTES[time_seed];

    let set = SPINNERS[minute as usize % SPINNERS.len()];
    let spinner_glyph = set[second as usize % set.len()];

    let pulse_phase = second as usize % PULSE.len();
    let (ring, outer) = PULSE[pulse_phase];

    AnimationFrame {
        palette,
        time_seed,
        spinner_glyph,
        outer_glyph: OUTER_GLYPHS[pulse_phase],
        center_glyph: CENTER_GLYPHS[time_seed],
        ring_color: palette.role(ring),
        outer_color: palette.role(outer),
        pulse_phase,
    }
}

pub fn frame_at<T: Timelike>(t: &T) -> AnimationFrame {
    frame_at_hms(t.hour(), t.minute(), t.second())
}
