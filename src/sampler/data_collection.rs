use std::{fs::File, io::Write, time::Duration};

use chrono::Utc;
use csv::Writer;
use serde::{Deserialize, Serialize};
use ts2_utils::{delay::SamplerConfig, Time};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
struct SampleData {
    index: usize,
    delay_secs: u64,
    departure: Time,
    delayed_departure: Time,
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    generated_at: i64,
    config: &'a SamplerConfig,
    sample_count: usize,
    min_delay_secs: Option<u64>,
    max_delay_secs: Option<u64>,
    mean_delay_secs: Option<f64>,
}

pub struct SamplerData {
    samples: Vec<SampleData>,
}

impl SamplerData {
    pub fn new() -> Self {
        SamplerData {
            samples: Vec::new(),
        }
    }

    pub fn record(&mut self, delay: Duration, departure: Time) {
        let data = SampleData {
            index: self.samples.len(),
            delay_secs: delay.as_secs(),
            departure,
            delayed_departure: departure + delay,
        };
        self.samples.push(data);
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    fn mean_delay_secs(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let total: f64 = self.samples.iter().map(|s| s.delay_secs as f64).sum();
        Some(total / self.samples.len() as f64)
    }

    fn summary<'a>(&self, config: &'a SamplerConfig) -> Summary<'a> {
        Summary {
            generated_at: Utc::now().timestamp_millis(),
            config,
            sample_count: self.sample_count(),
            min_delay_secs: self.samples.iter().map(|s| s.delay_secs).min(),
            max_delay_secs: self.samples.iter().map(|s| s.delay_secs).max(),
            mean_delay_secs: self.mean_delay_secs(),
        }
    }

    pub fn save_summary(&self, config: &SamplerConfig) -> Result<(), std::io::Error> {
        let summary = self.summary(config);
        let summary_json = serde_json::to_string_pretty(&summary)?;
        let mut summary_file = File::create(&config.summary_filepath)?;
        summary_file.write_all(summary_json.as_bytes())?;
        summary_file.flush()?;
        Ok(())
    }

    pub fn to_csv(&self, file_path: &str) -> Result<(), std::io::Error> {
        let file = File::create(file_path)?;
        let mut writer = Writer::from_writer(file);
        for data in &self.samples {
            writer.serialize(data)?;
        }
        writer.flush()?;
        Ok(())
    }
}
