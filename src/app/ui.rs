use std::fmt::Display;
use std::io::{self, Write};

pub const DIVIDING_LINE: &str = "________________________________________";

/// Line-oriented output surface. Every command's output is framed by
/// [`DIVIDING_LINE`].
pub struct Ui<W: Write> {
    out: W,
}

impl<W: Write> Ui<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn show(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    pub fn show_error(&mut self, err: impl Display) -> io::Result<()> {
        self.show(err)
    }

    pub fn divider(&mut self) -> io::Result<()> {
        self.show(DIVIDING_LINE)
    }

    pub fn greet(&mut self) -> io::Result<()> {
        self.divider()?;
        self.show("Greetings, human! I keep track of your tasks.")?;
        self.show("What can I do for you?")?;
        self.divider()?;
        self.out.flush()
    }

    pub fn farewell(&mut self) -> io::Result<()> {
        self.divider()?;
        self.show("Closing the task list. Have a nice day!")?;
        self.divider()?;
        self.out.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
