//! Histogram report and C array emission

use std::io::{self, Write};

use zrun::Histogram;

/// Bytes per line of the generated array literal
pub const BYTES_PER_LINE: usize = (254 - 4) / 5;

const BAR_WIDTH: f64 = 32.0;

/// Write one line per byte value with a linear and a logarithmic bar
pub fn write_histogram<W: Write>(
    mut out: W,
    hist: &Histogram,
    predictor: &str,
    encoding: &str,
) -> io::Result<()> {
    writeln!(out, "IMAGE_PREDICTOR='{}'", predictor)?;
    writeln!(out, "IMAGE_ENCODER='{}'", encoding)?;
    writeln!(out)?;

    let max_lin = hist.max_count() as f64;
    let max_log = if hist.max_count() > 0 {
        (hist.max_count() as f64).ln()
    } else {
        0.0
    };

    for value in 0..=255u8 {
        let n = hist.count(value);
        let lin_bar = if max_lin > 0.0 {
            (n as f64 / max_lin * BAR_WIDTH + 0.9) as usize
        } else {
            0
        };
        let log_bar = match n {
            0 => 0,
            // Every used value occurs exactly once: all bars are full
            _ if max_log == 0.0 => BAR_WIDTH as usize,
            _ => ((n as f64).ln() / max_log * (BAR_WIDTH - 1.0) + 1.0) as usize,
        };
        writeln!(
            out,
            "${:02X} | {:6}x |{:<32} |{}",
            value,
            n,
            "#".repeat(lin_bar),
            "#".repeat(log_bar)
        )?;
    }
    Ok(())
}

/// Write a C source file embedding `data` as an `unsigned char` array
pub fn write_c_array<W: Write>(
    mut out: W,
    symbol: &str,
    width: u32,
    height: u32,
    data: &[u8],
) -> io::Result<()> {
    writeln!(out, "// This file has been generated automatically, DO NOT EDIT!")?;
    writeln!(out)?;
    writeln!(out, "const int {}{:<9}= {:6};", symbol, "Width", width)?;
    writeln!(out, "const int {}{:<9}= {:6};", symbol, "Height", height)?;
    writeln!(out, "const int {}{:<9}= {:6};", symbol, "DataSize", data.len())?;
    write!(out, "const unsigned char {}Data[] = {{", symbol)?;

    let mut separator = "";
    for line in data.chunks(BYTES_PER_LINE) {
        let bytes: Vec<String> = line.iter().map(|b| format!("0x{:02X}", b)).collect();
        write!(out, "{}\n    {}", separator, bytes.join(","))?;
        separator = ",";
    }
    writeln!(out, "\n}};")?;
    Ok(())
}
