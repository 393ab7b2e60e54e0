#[cfg(test)]
mod tests {
    use crate::parsing::csv_parser::{
        parse_reminder_csv, parse_reminder_csv_str, read_reminder_csv_str,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_parse_basic_file() {
        let temp_file = create_temp_csv("date,message\n2025-04-01,Birthday\n2025-03-20,Personal note\n");

        let reminders = parse_reminder_csv(temp_file.path()).unwrap();

        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders["2025-04-01"], "Birthday");
        assert_eq!(reminders["2025-03-20"], "Personal note");
    }

    #[test]
    fn test_values_are_trimmed() {
        let reminders = parse_reminder_csv_str("date,message\n 2025-04-01 ,  Birthday  \n").unwrap();
        assert_eq!(reminders["2025-04-01"], "Birthday");
    }

    #[test]
    fn test_rows_missing_date_or_message_are_skipped() {
        let csv = "date,message\n,orphan message\n2025-05-01,\n2025-05-02,   \n2025-05-03,kept\n";

        let reminders = parse_reminder_csv_str(csv).unwrap();

        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders["2025-05-03"], "kept");
    }

    #[test]
    fn test_invalid_dates_are_skipped() {
        let csv = "date,message\n03/05/2025,wrong format\n2025-02-30,no such day\n2025-06-01,fine\n";

        let reminders = parse_reminder_csv_str(csv).unwrap();

        assert_eq!(reminders.len(), 1);
        assert!(reminders.contains_key("2025-06-01"));
    }

    #[test]
    fn test_quoted_messages_keep_commas() {
        let csv = "date,message\n2025-07-04,\"Picnic, then fireworks\"\n";
        let reminders = parse_reminder_csv_str(csv).unwrap();
        assert_eq!(reminders["2025-07-04"], "Picnic, then fireworks");
    }

    #[test]
    fn test_header_matching_ignores_case_and_extra_columns() {
        let csv = "Date,Owner,Message\n2025-08-01,sam,Renew passport\n";
        let reminders = parse_reminder_csv_str(csv).unwrap();
        assert_eq!(reminders["2025-08-01"], "Renew passport");
    }

    #[test]
    fn test_repeated_date_keeps_last_row() {
        let csv = "date,message\n2025-09-09,first\n2025-09-09,second\n";
        let reminders = parse_reminder_csv_str(csv).unwrap();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders["2025-09-09"], "second");
    }

    #[test]
    fn test_numeric_looking_values_stay_strings() {
        let df = read_reminder_csv_str("date,message\n2025-10-10,42\n").unwrap();
        assert_eq!(df.height(), 1);

        let reminders = parse_reminder_csv_str("date,message\n2025-10-10,42\n").unwrap();
        assert_eq!(reminders["2025-10-10"], "42");
    }

    #[test]
    fn test_missing_message_column_is_error() {
        let result = parse_reminder_csv_str("date,note\n2025-01-01,x\n");
        assert!(result.is_err());
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("message"), "unexpected error: {}", msg);
    }

    #[test]
    fn test_header_only_file_is_empty_map() {
        let reminders = parse_reminder_csv_str("date,message\n").unwrap();
        assert!(reminders.is_empty());
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = parse_reminder_csv(std::path::Path::new("/nonexistent/reminders.csv"));
        assert!(result.is_err());
    }
}
