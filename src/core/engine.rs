use crate::domain::model::{Record, RunSummary};
use crate::domain::ports::{JobConfig, RowJob, Storage};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<J: RowJob, S: Storage, C: JobConfig> {
    job: J,
    storage: S,
    config: C,
    monitor: SystemMonitor,
}

impl<J: RowJob, S: Storage, C: JobConfig> EtlEngine<J, S, C> {
    pub fn new(job: J, storage: S, config: C) -> Self {
        Self::new_with_monitoring(job, storage, config, false)
    }

    pub fn new_with_monitoring(job: J, storage: S, config: C, monitor_enabled: bool) -> Self {
        Self {
            job,
            storage,
            config,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Single streaming pass: reader -> row job -> writer. The output file
    /// gets exactly one header row; a kept row always has the full output
    /// schema width.
    pub async fn run(mut self) -> Result<RunSummary> {
        let job_name = self.job.name();
        tracing::info!("Starting {} job", job_name);
        tracing::info!("Reading from: {}", self.config.input_path());
        self.monitor.log_stats("Startup");

        let input = self.storage.open_input(self.config.input_path())?;
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

        // Strip a UTF-8 BOM if the export carries one
        let input_header: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        let output_header = self.job.output_header(&input_header)?;

        let output = self.storage.create_output(self.config.output_path())?;
        let mut writer = csv::Writer::from_writer(output);
        writer.write_record(&output_header)?;

        let interval = self.config.progress_interval().max(1);
        let mut summary = RunSummary::default();

        for row in reader.records() {
            let row = row?;
            summary.rows_processed += 1;

            let record = Record::from_row(&input_header, &row);
            if let Some(values) = self.job.process(&record) {
                writer.write_record(&values)?;
                summary.rows_kept += 1;
            }

            if summary.rows_processed % interval == 0 {
                tracing::info!("  Processed {} rows...", summary.rows_processed);
                self.monitor.log_stats(job_name);
            }
        }

        writer.flush()?;
        summary.extra = self.job.extra_summary();

        tracing::info!("Total rows processed: {}", summary.rows_processed);
        tracing::info!("Rows kept: {}", summary.rows_kept);
        for (label, count) in &summary.extra {
            tracing::info!("{}: {}", label, count);
        }
        tracing::info!("📁 Output saved to: {}", self.config.output_path());
        self.monitor.log_final_stats();

        Ok(summary)
    }
}
