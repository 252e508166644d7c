//-- winding

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub faces: usize,
}

/// Reverses the vertex references of a face record (`f v1 v2 ... vn`).
/// Returns `None` when the line is not a face and must be copied as is.
pub fn invert_line(line: &str) -> Option<String> {
    let mut ls = line.split_whitespace();
    if ls.next() != Some("f") {
        return None;
    }
    let vs: Vec<&str> = ls.rev().collect();
    Some(format!("f {}\n", vs.join(" ")))
}

/// Copies `reader` to `writer` line by line, rewriting each face with its
/// winding order flipped. Non-face lines keep their original terminator.
pub fn invert_stream<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> io::Result<Summary> {
    let mut summary = Summary::default();
    let mut l = String::new();
    loop {
        l.clear();
        if reader.read_line(&mut l)? == 0 {
            break;
        }
        summary.lines += 1;
        match invert_line(&l) {
            Some(f) => {
                writer.write_all(f.as_bytes())?;
                summary.faces += 1;
            }
            None => writer.write_all(l.as_bytes())?,
        }
    }
    writer.flush()?;
    Ok(summary)
}

/// Inverts the winding order of every face of the OBJ file `input` and
/// writes the result to `output` (created or truncated).
pub fn invert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> io::Result<Summary> {
    //-- input first, a missing file must not leave an empty output behind
    let reader = open_input(input.as_ref())?;
    let writer = create_output(output.as_ref())?;
    invert_stream(reader, writer)
}

pub fn open_input(path: &Path) -> io::Result<BufReader<File>> {
    debug!("reading {}", path.display());
    let f = File::open(path).map_err(|e| with_path(e, path))?;
    Ok(BufReader::new(f))
}

pub fn create_output(path: &Path) -> io::Result<BufWriter<File>> {
    debug!("writing {}", path.display());
    let f = File::create(path).map_err(|e| with_path(e, path))?;
    Ok(BufWriter::new(f))
}

fn with_path(e: io::Error, path: &Path) -> io::Error {
    io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
}
