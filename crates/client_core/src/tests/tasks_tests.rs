use super::*;

fn record(id: i64, task: &str, description: Option<&str>, due_date: Option<&str>) -> TaskRecord {
    TaskRecord {
        id: TaskId(id),
        task: task.to_string(),
        description: description.map(str::to_string),
        due_date: due_date.map(str::to_string),
    }
}

fn board() -> TaskBoard {
    TaskBoard::new(vec![
        record(1, "Buy milk", Some("2 litres"), Some("2024-05-01")),
        record(2, "Call Sam", None, None),
        record(3, "", Some("  "), Some("Friday")),
    ])
}

#[test]
fn all_tasks_start_pending() {
    let board = board();
    assert_eq!(board.pending_count(), 3);
    assert!(board.rows().iter().all(|row| !row.completed));
    assert!(!board.popup().visible);
}

#[test]
fn checking_and_unchecking_updates_pending_count() {
    let mut board = board();

    assert_eq!(board.set_completed(TaskId(1), true), Some(2));
    assert_eq!(board.set_completed(TaskId(1), true), Some(2));
    assert_eq!(board.toggle(TaskId(2)), Some(1));
    assert_eq!(board.toggle(TaskId(1)), Some(2));
    assert!(board.rows()[1].completed);
    assert_eq!(board.toggle(TaskId(99)), None);
    assert_eq!(board.pending_count(), 2);
}

#[test]
fn info_popup_lists_present_fields() {
    let mut board = board();

    let popup = board.open_info(TaskId(1)).expect("popup").clone();

    assert!(popup.visible);
    assert!(popup.backdrop_visible);
    assert_eq!(popup.title, "Buy milk");
    assert_eq!(popup.lines, ["Description: 2 litres", "Due Date: 2024-05-01"]);
}

#[test]
fn info_popup_without_details_says_no_data() {
    let mut board = board();

    let popup = board.open_info(TaskId(2)).expect("popup");

    assert_eq!(popup.lines, [NO_DATA_MESSAGE]);
}

#[test]
fn blank_title_and_description_fall_back() {
    let mut board = board();

    let popup = board.open_info(TaskId(3)).expect("popup");

    assert_eq!(popup.title, "Task");
    assert_eq!(popup.lines, ["Due Date: Friday"]);
}

#[test]
fn closing_hides_popup_and_backdrop() {
    let mut board = board();
    board.open_info(TaskId(1));

    board.close_info();

    assert!(!board.popup().visible);
    assert!(!board.popup().backdrop_visible);
    assert!(board.open_info(TaskId(42)).is_none());
    assert!(!board.popup().visible);
}
