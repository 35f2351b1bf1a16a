use crate::ChangeFilter;

use std::path::PathBuf;

use notify::event::{AccessKind, CreateKind, DataChange, ModifyKind, RemoveKind};
use notify::{Event, EventKind};

fn filter() -> ChangeFilter {
    ChangeFilter::new(
        PathBuf::from("/work/app"),
        vec![".git".to_string(), "target".to_string()],
    )
}

fn modified(path: &str) -> Event {
    Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content))).add_path(PathBuf::from(path))
}

#[test]
fn given_source_file_modified_when_filtered_then_change() {
    assert!(filter().is_change(&modified("/work/app/src/main.go")));
}

#[test]
fn given_file_created_when_filtered_then_change() {
    // Given
    let event = Event::new(EventKind::Create(CreateKind::File)).add_path(PathBuf::from("/work/app/new.go"));

    // Then
    assert!(filter().is_change(&event));
}

#[test]
fn given_file_under_ignored_directory_when_filtered_then_no_change() {
    assert!(!filter().is_change(&modified("/work/app/.git/index")));
    assert!(!filter().is_change(&modified("/work/app/target/debug/app")));
}

#[test]
fn given_ignored_name_above_root_when_filtered_then_still_change() {
    // Given
    let filter = ChangeFilter::new(PathBuf::from("/home/me/target/app"), vec!["target".into()]);

    // Then
    assert!(filter.is_change(&modified("/home/me/target/app/main.go")));
}

#[test]
fn given_remove_or_access_event_when_filtered_then_no_change() {
    // Given
    let removed = Event::new(EventKind::Remove(RemoveKind::File)).add_path(PathBuf::from("/work/app/a.go"));
    let accessed = Event::new(EventKind::Access(AccessKind::Any)).add_path(PathBuf::from("/work/app/a.go"));

    // Then
    assert!(!filter().is_change(&removed));
    assert!(!filter().is_change(&accessed));
}

#[test]
fn given_event_with_one_relevant_path_when_filtered_then_change() {
    // Given
    let event = modified("/work/app/.git/HEAD").add_path(PathBuf::from("/work/app/lib.go"));

    // Then
    assert!(filter().is_change(&event));
}
