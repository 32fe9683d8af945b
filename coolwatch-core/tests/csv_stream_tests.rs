//! Tests for the CSV reading stream

#[cfg(all(test, feature = "std"))]
mod tests {
    use coolwatch_core::stream::{load_readings, CsvStream, Stream, StreamError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    // 2024-01-01 00:00:00 UTC
    const NEW_YEAR_MS: u64 = 1_704_067_200_000;

    fn path_of(file: &NamedTempFile) -> &str {
        file.path().to_str().unwrap()
    }

    #[test]
    fn parses_header_mapped_rows() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Timestamp,Temperature,Humidity,Luminosity,Charge").unwrap();
        writeln!(temp_file, "2024-01-01 00:00:00,25.5,40.25,512,930").unwrap();
        writeln!(temp_file, "2024-01-01T00:01:00,26,41,520,935").unwrap();
        temp_file.flush().unwrap();

        let mut stream = CsvStream::open(path_of(&temp_file))
            .unwrap()
            .with_header_row();

        let first = stream.poll_next().unwrap();
        assert_eq!(first.timestamp, Some(NEW_YEAR_MS));
        assert_eq!(first.temperature, Some(25.5));
        assert_eq!(first.humidity, Some(40.25));
        assert_eq!(first.luminosity, Some(512.0));
        assert_eq!(first.charge, Some(930.0));

        // ISO-8601 T separator parses to one minute later
        let second = stream.poll_next().unwrap();
        assert_eq!(second.timestamp, Some(NEW_YEAR_MS + 60_000));

        match stream.poll_next() {
            Err(nb::Error::Other(StreamError::EndOfStream)) => {}
            other => panic!("expected EndOfStream, got {:?}", other.map(|r| r.timestamp)),
        }

        assert_eq!(stream.stats().rows_read, 2);
        assert_eq!(stream.stats().cells_coerced, 0);
    }

    #[test]
    fn garbage_cells_coerce_to_missing() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Timestamp,Temperature,Humidity,Luminosity,Charge").unwrap();
        // Unparseable timestamp, non-numeric temperature, empty humidity,
        // infinite luminosity, good charge
        writeln!(temp_file, "not-a-date,err,,inf,930").unwrap();
        temp_file.flush().unwrap();

        let mut stream = CsvStream::open(path_of(&temp_file))
            .unwrap()
            .with_header_row();

        // The row survives with its parseable cells intact
        let reading = stream.poll_next().unwrap();
        assert_eq!(reading.timestamp, None);
        assert_eq!(reading.temperature, None);
        assert_eq!(reading.humidity, None);
        assert_eq!(reading.luminosity, None);
        assert_eq!(reading.charge, Some(930.0));

        // Empty humidity is missing, not coerced; the other three count
        assert_eq!(stream.stats().cells_coerced, 3);
    }

    #[test]
    fn short_rows_fill_with_missing() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Timestamp,Temperature,Humidity,Luminosity,Charge").unwrap();
        writeln!(temp_file, "1000,21.5").unwrap();
        temp_file.flush().unwrap();

        let mut stream = CsvStream::open(path_of(&temp_file))
            .unwrap()
            .with_header_row();

        let reading = stream.poll_next().unwrap();
        assert_eq!(reading.timestamp, Some(1000));
        assert_eq!(reading.temperature, Some(21.5));
        assert_eq!(reading.humidity, None);
        assert_eq!(reading.luminosity, None);
        assert_eq!(reading.charge, None);
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Timestamp,Temperature,Humidity,Luminosity,Charge").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "# operator note").unwrap();
        writeln!(temp_file, "2000,22.0,40,100,800").unwrap();
        temp_file.flush().unwrap();

        let readings = load_readings(path_of(&temp_file)).unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].timestamp, Some(2000));
    }

    #[test]
    fn reordered_columns_map_by_name() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Charge,Timestamp,Temperature").unwrap();
        writeln!(temp_file, "930,3000,24.5").unwrap();
        temp_file.flush().unwrap();

        let readings = load_readings(path_of(&temp_file)).unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].charge, Some(930.0));
        assert_eq!(readings[0].timestamp, Some(3000));
        assert_eq!(readings[0].temperature, Some(24.5));
        // No such columns in this file
        assert_eq!(readings[0].humidity, None);
        assert_eq!(readings[0].luminosity, None);
    }

    #[test]
    fn positional_fallback_without_header() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "4000,23.0,45,200,850").unwrap();
        temp_file.flush().unwrap();

        let mut stream = CsvStream::open(path_of(&temp_file)).unwrap();
        let reading = stream.poll_next().unwrap();
        assert_eq!(reading.timestamp, Some(4000));
        assert_eq!(reading.luminosity, Some(200.0));
    }

    #[test]
    fn missing_file_is_a_transport_error() {
        match CsvStream::open("/nonexistent/arduino_data.csv") {
            Err(StreamError::Transport(_)) => {}
            other => panic!("expected Transport error, got {:?}", other.is_ok()),
        }
    }
}
