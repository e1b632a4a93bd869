/// The distress prosign, sent as a single character.
pub const SOS: &str = "...---...";

/// Something that can send Morse code, e.g. by blinking an LED or keying a buzzer.
///
/// These are called from [`sos_trap`](crate::sos_trap) and must not fail: an implementation
/// ignores any hardware error it runs into.
pub trait MorseWriter {
    /// Silence separating two words.
    fn write_word_gap(&mut self);

    /// The [`SOS`] prosign.
    fn write_sos(&mut self);

    /// Sends `s` character by character. A space is a word gap, characters without a Morse code
    /// are skipped.
    fn write_string(&mut self, s: &str);
}

/// International Morse code of `c` as dots and dashes. Letters are case-insensitive.
pub fn encode(c: char) -> Option<&'static str> {
    let code = match c.to_ascii_uppercase() {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",
        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        '.' => ".-.-.-",
        ',' => "--..--",
        '?' => "..--..",
        '\'' => ".----.",
        '!' => "-.-.--",
        '/' => "-..-.",
        '(' => "-.--.",
        ')' => "-.--.-",
        '&' => ".-...",
        ':' => "---...",
        ';' => "-.-.-.",
        '=' => "-...-",
        '+' => ".-.-.",
        '-' => "-....-",
        '_' => "..--.-",
        '"' => ".-..-.",
        '$' => "...-..-",
        '@' => ".--.-.",
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_letters_digits_and_punctuation() {
        assert_eq!(encode('s'), Some("..."));
        assert_eq!(encode('O'), Some("---"));
        assert_eq!(encode('7'), Some("--..."));
        assert_eq!(encode('/'), Some("-..-."));
    }

    #[test]
    fn unknown_characters_have_no_code() {
        assert_eq!(encode(' '), None);
        assert_eq!(encode('#'), None);
        assert_eq!(encode('é'), None);
    }

    #[test]
    fn sos_is_s_o_s() {
        let joined = [encode('S'), encode('O'), encode('S')].map(Option::unwrap).concat();
        assert_eq!(joined, SOS);
    }
}
