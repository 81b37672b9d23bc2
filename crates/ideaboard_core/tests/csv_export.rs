use ideaboard_core::{
    csv_row, ideas_to_csv, write_csv_file, ExportError, IdeaService, InMemoryIdeaRepository,
    CSV_HEADER, EXPORT_FILE_NAME,
};

fn two_idea_service() -> IdeaService<InMemoryIdeaRepository> {
    let mut service = IdeaService::new(InMemoryIdeaRepository::new());
    let first = service.create_idea(
        "Dark mode",
        "Night theme",
        70,
        30,
        &["ui".to_string(), "theme".to_string()],
    );
    service.create_idea("Export", "CSV download", 40, 60, &[]);
    service.vote_idea(first.id, 3);
    service
}

#[test]
fn export_has_header_then_one_row_per_idea() {
    let service = two_idea_service();
    let ideas = service.list_ideas();
    let csv = ideas_to_csv(&ideas);
    let lines: Vec<&str> = csv.split('\n').collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "ID,Title,Description,Impact,Effort,Votes,Tags");
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(
        lines[1],
        format!(
            "{},\"Dark mode\",\"Night theme\",70,30,3,\"ui, theme\"",
            ideas[0].id
        )
    );
    assert_eq!(
        lines[2],
        format!("{},\"Export\",\"CSV download\",40,60,0,\"\"", ideas[1].id)
    );
    assert!(!csv.ends_with('\n'));
}

#[test]
fn quoted_fields_escape_embedded_quotes_and_keep_commas() {
    let mut service = IdeaService::new(InMemoryIdeaRepository::new());
    let idea = service.create_idea(
        "Say \"hi\"",
        "one, two",
        50,
        50,
        &["a,b".to_string()],
    );

    assert_eq!(
        csv_row(&idea),
        format!(
            "{},\"Say \"\"hi\"\"\",\"one, two\",50,50,0,\"a,b\"",
            idea.id
        )
    );
}

#[test]
fn negative_votes_are_exported_as_is() {
    let mut service = IdeaService::new(InMemoryIdeaRepository::new());
    let idea = service.create_idea("t", "d", 0, 100, &[]);
    service.vote_idea(idea.id, -2);

    let csv = ideas_to_csv(&service.list_ideas());
    assert!(csv.ends_with(",0,100,-2,\"\""), "unexpected export: {csv}");
}

#[test]
fn write_csv_file_creates_ideas_csv() {
    let service = two_idea_service();
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested");

    let path = write_csv_file(&service.list_ideas(), &target).unwrap();
    assert_eq!(path, target.join(EXPORT_FILE_NAME));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, ideas_to_csv(&service.list_ideas()));
}

#[test]
fn write_csv_file_reports_io_failures() {
    let service = two_idea_service();
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "occupied").unwrap();

    let err = write_csv_file(&service.list_ideas(), &blocker).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
    assert!(err.to_string().contains("failed to write export"));
}

#[test]
fn empty_board_exports_header_line_only() {
    let service = IdeaService::new(InMemoryIdeaRepository::new());
    let csv = ideas_to_csv(&service.list_ideas());

    assert_eq!(csv, "ID,Title,Description,Impact,Effort,Votes,Tags\n");
    assert_eq!(csv.lines().count(), 1);
}
