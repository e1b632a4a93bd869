use crate::trap::morse::{encode, MorseWriter, SOS};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

/// Durations of the Morse elements, all derived from the length of a dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MorseTiming {
    /// Length of a dot in milliseconds.
    pub unit_ms: u32,
}

impl MorseTiming {
    pub const fn new(unit_ms: u32) -> Self {
        MorseTiming { unit_ms }
    }

    /// Timing for a speed in words per minute, using the PARIS standard word.
    pub const fn from_wpm(wpm: u32) -> Self {
        let wpm = if wpm == 0 { 1 } else { wpm };
        MorseTiming::new(1200 / wpm)
    }

    pub const fn dot_ms(&self) -> u32 {
        self.unit_ms
    }

    pub const fn dash_ms(&self) -> u32 {
        3 * self.unit_ms
    }

    /// Silence between the dots and dashes of a character.
    pub const fn symbol_gap_ms(&self) -> u32 {
        self.unit_ms
    }

    pub const fn char_gap_ms(&self) -> u32 {
        3 * self.unit_ms
    }

    pub const fn word_gap_ms(&self) -> u32 {
        7 * self.unit_ms
    }
}

impl Default for MorseTiming {
    /// Slow enough to read off a blinking LED.
    fn default() -> Self {
        MorseTiming::new(200)
    }
}

/// Sends Morse code by switching an output pin, high being on.
pub struct PinMorseWriter<P, D> {
    pin: P,
    delay: D,
    timing: MorseTiming,
}

impl<P, D> PinMorseWriter<P, D>
where
    P: OutputPin,
    D: DelayMs<u32>,
{
    /// Takes over `pin` and turns it off.
    pub fn new(mut pin: P, delay: D, timing: MorseTiming) -> Self {
        pin.set_low().ok();
        PinMorseWriter { pin, delay, timing }
    }

    pub fn timing(&self) -> MorseTiming {
        self.timing
    }

    /// Gives back the pin and the delay.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    fn key(&mut self, on_ms: u32) {
        // Doesn't matter if a blink fails, there is nothing left to report it to.
        self.pin.set_high().ok();
        self.delay.delay_ms(on_ms);
        self.pin.set_low().ok();
    }

    fn silence(&mut self, ms: u32) {
        self.pin.set_low().ok();
        self.delay.delay_ms(ms);
    }

    /// Sends one character given as dots and dashes.
    fn write_symbols(&mut self, symbols: &str) {
        for (i, symbol) in symbols.chars().enumerate() {
            if i > 0 {
                self.silence(self.timing.symbol_gap_ms());
            }
            match symbol {
                '-' => self.key(self.timing.dash_ms()),
                _ => self.key(self.timing.dot_ms()),
            }
        }
    }
}

impl<P, D> MorseWriter for PinMorseWriter<P, D>
where
    P: OutputPin,
    D: DelayMs<u32>,
{
    fn write_word_gap(&mut self) {
        self.silence(self.timing.word_gap_ms());
    }

    fn write_sos(&mut self) {
        self.write_symbols(SOS);
    }

    fn write_string(&mut self, s: &str) {
        let mut previous_was_char = false;
        for c in s.chars() {
            if c == ' ' {
                self.write_word_gap();
                previous_was_char = false;
            } else if let Some(symbols) = encode(c) {
                if previous_was_char {
                    self.silence(self.timing.char_gap_ms());
                }
                self.write_symbols(symbols);
                previous_was_char = true;
            }
        }
    }
}
