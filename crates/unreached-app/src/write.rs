use camino::Utf8Path;
use unreached_domain::Trace;
use unreached_types::ids::TRACE_REPORT_PATH;

use crate::error::AuditError;

/// Render the unreached list as the on-disk artifact: a pretty JSON array plus a trailing newline.
pub fn serialize_report(unreached: &[String]) -> Result<Vec<u8>, AuditError> {
    let mut bytes = serde_json::to_vec_pretty(unreached)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write the report to `path`, creating missing parent directories.
pub fn write_report(path: &Utf8Path, unreached: &[String], trace: Trace) -> Result<(), AuditError> {
    let bytes = serialize_report(unreached)?;
    let write_err = |source| AuditError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, bytes).map_err(write_err)?;

    trace.value(TRACE_REPORT_PATH, path.as_str());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unreached_test_util::TempProject;

    #[test]
    fn report_is_two_space_indented_with_trailing_newline() {
        let bytes = serialize_report(&["src/a.js".to_string(), "src/b.js".to_string()])
            .expect("serialize");
        assert_eq!(
            String::from_utf8(bytes).expect("utf8"),
            "[\n  \"src/a.js\",\n  \"src/b.js\"\n]\n"
        );
    }

    #[test]
    fn empty_report_is_an_empty_array() {
        let bytes = serialize_report(&[]).expect("serialize");
        assert_eq!(bytes, b"[]\n");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let project = TempProject::new();
        let out = project.path(".unreached/deep/unused-files.json");

        write_report(&out, &["x.js".to_string()], Trace::disabled()).expect("write");
        assert_eq!(project.read(".unreached/deep/unused-files.json"), "[\n  \"x.js\"\n]\n");
    }

    #[test]
    fn parent_that_is_a_file_is_a_write_error() {
        let project = TempProject::new();
        project.write("blocker", "");
        let out = project.path("blocker/report.json");

        let err = write_report(&out, &[], Trace::disabled()).unwrap_err();
        match err {
            AuditError::ReportWrite { path, .. } => assert_eq!(path, out),
            other => panic!("expected ReportWrite, got {other:?}"),
        }
    }

    #[test]
    fn overwrites_previous_report() {
        let project = TempProject::new();
        let out = project.path("report.json");
        write_report(&out, &["old.js".to_string()], Trace::disabled()).expect("first");
        write_report(&out, &[], Trace::disabled()).expect("second");
        assert_eq!(project.read("report.json"), "[]\n");
    }
}
