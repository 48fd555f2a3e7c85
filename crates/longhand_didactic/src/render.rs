use crate::step::Trace;

impl Trace {
    /// Numbered, sectioned rendering of every step.
    pub fn render_steps(&self) -> String {
        let mut out = String::from("[Solution Steps]\n");
        for (i, step) in self.iter().enumerate() {
            out.push_str(&format!("\nStep {}:\n", i + 1));
            out.push_str(&format!("What we're doing: {}\n", step.description));
            if !step.work.is_empty() {
                out.push_str(&format!("How we're doing it: {}\n", step.work));
            }
            if !step.result.is_empty() {
                out.push_str(&format!("What we got: {}\n", step.result));
            }
        }
        out
    }

    /// Compact one-line-per-step rendering.
    pub fn render_scratchpad(&self) -> String {
        let mut out = String::from("[All our work]\n");
        for (i, step) in self.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step.scratch_line()));
        }
        out
    }
}

/// Replace the display-only glyphs used in shown work with ASCII.
pub fn ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '×' | '·' => out.push('x'),
            '²' => out.push_str("^2"),
            '½' => out.push_str("1/2"),
            'π' => out.push_str("pi"),
            '√' => out.push_str("sqrt"),
            '±' => out.push_str("+/-"),
            '₁' => out.push('1'),
            '₂' => out.push('2'),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trace {
        let mut trace = Trace::new();
        trace.work("[START] Solving equation", "2x + 3 = 7");
        trace.record("Solving for x", "4.0x = 8.0", "x = 2.0");
        trace.note("Done");
        trace
    }

    #[test]
    fn test_render_steps_skips_empty_fields() {
        let text = sample().render_steps();
        assert!(text.starts_with("[Solution Steps]\n"));
        assert!(text.contains("\nStep 2:\nWhat we're doing: Solving for x\nHow we're doing it: 4.0x = 8.0\nWhat we got: x = 2.0\n"));
        assert!(text.contains("\nStep 3:\nWhat we're doing: Done\n"));
        assert!(!text.contains("How we're doing it: \n"));
    }

    #[test]
    fn test_render_scratchpad_numbers_lines() {
        let text = sample().render_scratchpad();
        assert!(text.contains("1. [START] Solving equation: 2x + 3 = 7\n"));
        assert!(text.contains("2. Solving for x: 4.0x = 8.0 => x = 2.0\n"));
        assert!(text.ends_with("3. Done\n"));
    }

    #[test]
    fn test_ascii_transliteration() {
        assert_eq!(ascii("9 × 9"), "9 x 9");
        assert_eq!(ascii("b² - 4ac"), "b^2 - 4ac");
        assert_eq!(ascii("x₁ = (-b ± √d)"), "x1 = (-b +/- sqrtd)");
        assert_eq!(ascii("½ × π"), "1/2 x pi");
    }
}
