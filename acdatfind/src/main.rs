use std::fs::File;
use std::io::{self, prelude::*, stdin, BufReader};
use std::path::PathBuf;

use acdat::{Automaton, Term};
use clap::{ArgAction, Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ArgColor {
    Never,
    Always,
    Auto,
}

impl From<ArgColor> for ColorChoice {
    fn from(color: ArgColor) -> Self {
        match color {
            ArgColor::Never => Self::Never,
            ArgColor::Always => Self::Always,
            ArgColor::Auto => Self::Auto,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "acdatfind",
    about = "A program to find patterns in files.",
    disable_help_flag = true
)]
struct Args {
    /// Match patterns separated with new lines.
    #[arg(short)]
    patterns: Option<String>,

    /// A filename containing patterns.
    #[arg(short = 'f')]
    pattern_file: Option<PathBuf>,

    /// Suppresses printing filenames.
    #[arg(short = 'h', long)]
    no_filename: bool,

    /// Prints line numbers.
    #[arg(short = 'n', long)]
    line_number: bool,

    /// Highlights the matching texts.
    #[arg(long, value_enum, default_value_t = ArgColor::Never)]
    color: ArgColor,

    /// Reports only the first match of each line.
    #[arg(long)]
    first: bool,

    /// Prints only lines that are equal to a pattern.
    #[arg(long)]
    exact: bool,

    /// Prints the failure table and the output table, and exits.
    #[arg(long)]
    dump: bool,

    /// Prints help.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// File paths.
    #[arg(name = "FILE")]
    files: Vec<PathBuf>,
}

struct Printer<'a> {
    pma: &'a Automaton,
    args: &'a Args,
    stream: StandardStream,
}

impl<'a> Printer<'a> {
    fn matches(&self, line: &str) -> Vec<Term<'a>> {
        let pma = self.pma;
        if self.args.exact {
            pma.exact_match(line).into_iter().collect()
        } else if self.args.first {
            pma.search(line, true)
        } else if let ArgColor::Never = self.args.color {
            // Without highlighting, one match is enough to print the line.
            pma.search_iter(line).take(1).collect()
        } else {
            pma.search(line, false)
        }
    }

    /// Prints `line` if it contains a pattern. Nothing is printed otherwise.
    fn find_and_output(
        &mut self,
        line: &str,
        filename: Option<&str>,
        line_no: Option<usize>,
    ) -> io::Result<()> {
        let terms = self.matches(line);
        if terms.is_empty() {
            return Ok(());
        }
        if let Some(filename) = filename {
            write!(self.stream, "{}:", filename)?;
        }
        if let Some(line_no) = line_no {
            write!(self.stream, "{}:", line_no)?;
        }

        // Overlapping matches are merged into a single highlighted span.
        let mut color_counts = vec![0isize; line.len() + 1];
        for t in &terms {
            let range = t.byte_range();
            color_counts[range.start] += 1;
            color_counts[range.end] -= 1;
        }
        let mut depth = 0;
        let mut prev_pos = 0;
        for (pos, c) in color_counts.into_iter().enumerate() {
            let new_depth = depth + c;
            if depth == 0 && new_depth != 0 {
                self.stream.reset()?;
                write!(self.stream, "{}", &line[prev_pos..pos])?;
                prev_pos = pos;
            } else if depth != 0 && new_depth == 0 {
                self.stream
                    .set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(self.stream, "{}", &line[prev_pos..pos])?;
                prev_pos = pos;
            }
            depth = new_depth;
        }
        self.stream.reset()?;
        writeln!(self.stream, "{}", &line[prev_pos..])
    }

    fn find_in_lines<R>(&mut self, rdr: R, filename: Option<&str>) -> io::Result<()>
    where
        R: BufRead,
    {
        for (i, line) in rdr.lines().enumerate() {
            let line_no = self.args.line_number.then_some(i + 1);
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    match filename {
                        Some(filename) => eprintln!("{}: {}", filename, err),
                        None => eprintln!("{}", err),
                    }
                    break;
                }
            };
            self.find_and_output(&line, filename, line_no)?;
        }
        Ok(())
    }
}

fn load_patterns(args: &Args) -> io::Result<Vec<String>> {
    let mut patterns = vec![];
    if let Some(path) = &args.pattern_file {
        let buf = BufReader::new(File::open(path)?);
        for line in buf.lines() {
            let line = line?;
            if !line.is_empty() {
                patterns.push(line);
            }
        }
    }
    if let Some(pats_string) = &args.patterns {
        patterns.extend(
            pats_string
                .split('\n')
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        );
    }
    Ok(patterns)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let pma = Automaton::new(load_patterns(&args)?)?;

    if args.dump {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        pma.write_failure_table(&mut lock)?;
        pma.write_output_table(&mut lock)?;
        return Ok(());
    }

    let mut printer = Printer {
        pma: &pma,
        args: &args,
        stream: StandardStream::stdout(args.color.into()),
    };

    if args.files.is_empty() {
        printer.find_in_lines(stdin().lock(), None)?;
    }

    for path in &args.files {
        let filename = path.to_string_lossy();
        match File::open(path) {
            Ok(file) => {
                let filename = (!args.no_filename).then_some(filename.as_ref());
                printer.find_in_lines(BufReader::new(file), filename)?;
            }
            Err(err) => eprintln!("{}: {}", filename, err),
        }
    }

    Ok(())
}
