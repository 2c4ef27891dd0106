use crate::error::MalformedProcessLineError;

/// One line of `ps -o rss,pmem,pcpu` output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessSample {
    pub rss: u64, // KB
    pub pmem: f64,
    pub pcpu: f64,
}

pub fn parse_process_line(line: &str) -> Result<ProcessSample, MalformedProcessLineError> {
    let malformed = |reason: String| MalformedProcessLineError {
        line: line.to_string(),
        reason,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(malformed(format!("expected 3 fields, got {}", fields.len())));
    }

    let rss = fields[0]
        .parse::<u64>()
        .map_err(|e| malformed(format!("rss {:?}: {}", fields[0], e)))?;
    let pmem = fields[1]
        .parse::<f64>()
        .map_err(|e| malformed(format!("pmem {:?}: {}", fields[1], e)))?;
    let pcpu = fields[2]
        .parse::<f64>()
        .map_err(|e| malformed(format!("pcpu {:?}: {}", fields[2], e)))?;

    Ok(ProcessSample { rss, pmem, pcpu })
}

/// Parses headerless output, one process per line. Blank output is an empty table.
pub fn parse_process_table(output: &str) -> Result<Vec<ProcessSample>, MalformedProcessLineError> {
    let output = output.trim();
    if output.is_empty() {
        return Ok(Vec::new());
    }
    output.split('\n').map(parse_process_line).collect()
}
