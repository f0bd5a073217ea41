// The character display is an external collaborator: the core hands it a
// formatted readout and these two commands, nothing more.
pub trait Display {
    fn clear_line(&mut self, line: usize);
    fn write_str(&mut self, text: &str);
}
