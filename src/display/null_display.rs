use crate::display::display::Display;

pub struct NullDisplay;

impl Display for NullDisplay {
    fn clear_line(&mut self, _line: usize) {}
    fn write_str(&mut self, _text: &str) {}
}
