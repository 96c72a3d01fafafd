//! Human-readable dumps of the automaton tables.

use std::io::{self, Write};

use crate::table::TransitionTable;
use crate::{Automaton, UNUSED_STATE_IDX};

impl<T> Automaton<T>
where
    T: TransitionTable,
{
    /// Writes the failure pointer of every state as a table.
    ///
    /// # Errors
    ///
    /// Errors of `wtr` are returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use acdat::Automaton;
    ///
    /// let pma = Automaton::new(["ab", "b"]).unwrap();
    ///
    /// let mut buf = vec![];
    /// pma.write_failure_table(&mut buf).unwrap();
    /// let table = String::from_utf8(buf).unwrap();
    ///
    /// assert!(table.starts_with("+-------+-------+\n| state |  fail |\n"));
    /// ```
    pub fn write_failure_table<W>(&self, mut wtr: W) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(wtr, "+-------+-------+")?;
        writeln!(wtr, "| {:>5} | {:>5} |", "state", "fail")?;
        writeln!(wtr, "+-------+-------+")?;
        for (state, &fail) in self.fail.iter().enumerate() {
            if fail != UNUSED_STATE_IDX {
                writeln!(wtr, "| {:>5} | {:>5} |", state, fail)?;
            }
        }
        writeln!(wtr, "+-------+-------+")?;
        Ok(())
    }

    /// Writes the output list of every state that has one as a table, in ascending order of
    /// states.
    ///
    /// # Errors
    ///
    /// Errors of `wtr` are returned.
    pub fn write_output_table<W>(&self, mut wtr: W) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(wtr, "+-------+------------")?;
        writeln!(wtr, "| {:>5} | {}", "state", "keywords")?;
        writeln!(wtr, "+-------+------------")?;
        for (state, output) in self.outputs.iter().enumerate() {
            if output.is_empty() {
                continue;
            }
            write!(wtr, "| {:>5} |", state)?;
            for &id in output {
                write!(wtr, " {}", self.keyword(id).as_str())?;
            }
            writeln!(wtr)?;
        }
        writeln!(wtr, "+-------+------------")?;
        Ok(())
    }
}
