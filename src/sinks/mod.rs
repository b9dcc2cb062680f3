//! Output sinks
//!
//! Console and JSON-file renderers for campaign statistics. Both sinks are
//! idempotent for a given statistics value; the file sink overwrites any
//! prior content instead of appending.

use crate::models::campaign::CampaignStats;
use crate::utils::error::AppResult;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Destination for one rendered statistics value
pub trait StatsSink {
    /// Short sink name for log lines
    fn name(&self) -> &'static str;

    /// Render the statistics for the given campaign
    fn write_stats(&mut self, campaign_id: &str, stats: &CampaignStats) -> AppResult<()>;
}

/// Human-readable console renderer
///
/// Generic over the writer so tests can capture output into a buffer.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    /// Console sink bound to the process stdout
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink and return its writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StatsSink for ConsoleSink<W> {
    fn name(&self) -> &'static str {
        "console"
    }

    fn write_stats(&mut self, campaign_id: &str, stats: &CampaignStats) -> AppResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- Campaign Statistics ---")?;
        writeln!(self.out, "Campaign ID: {}", campaign_id)?;
        writeln!(self.out, "Impressions: {}", stats.impressions)?;
        writeln!(self.out, "Clicks: {}", stats.clicks)?;
        writeln!(self.out, "Spend: {}", stats.spend)?;
        if let Some(ctr) = stats.ctr {
            writeln!(self.out, "CTR: {}", ctr)?;
        }
        if let Some(avg_cpc) = stats.avg_cpc {
            writeln!(self.out, "Avg CPC: {}", avg_cpc)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// JSON file renderer
///
/// Serializes the statistics as pretty-printed JSON at a fixed path,
/// replacing whatever was there before.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsSink for JsonFileSink {
    fn name(&self) -> &'static str {
        "json_file"
    }

    fn write_stats(&mut self, _campaign_id: &str, stats: &CampaignStats) -> AppResult<()> {
        let rendered = serde_json::to_string_pretty(stats)?;
        fs::write(&self.path, rendered)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> CampaignStats {
        CampaignStats {
            impressions: 1000,
            clicks: 50,
            spend: 25.50,
            ctr: None,
            avg_cpc: None,
        }
    }

    #[test]
    fn test_console_sink_renders_all_values() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.write_stats("12345", &sample_stats()).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("--- Campaign Statistics ---"));
        assert!(output.contains("Campaign ID: 12345"));
        assert!(output.contains("Impressions: 1000"));
        assert!(output.contains("Clicks: 50"));
        assert!(output.contains("Spend: 25.5"));
        assert!(!output.contains("status"));
    }

    #[test]
    fn test_console_sink_includes_optional_metrics_when_present() {
        let mut stats = sample_stats();
        stats.ctr = Some(0.05);

        let mut sink = ConsoleSink::new(Vec::new());
        sink.write_stats("12345", &stats).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("CTR: 0.05"));
        assert!(!output.contains("Avg CPC"));
    }
}
