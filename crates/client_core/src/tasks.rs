//! Task checklist: completion toggles, pending count and the info popup.

use shared::{domain::TaskId, protocol::TaskRecord};

pub const NO_DATA_MESSAGE: &str = "No data found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub record: TaskRecord,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoPopupView {
    pub visible: bool,
    pub backdrop_visible: bool,
    pub title: String,
    pub lines: Vec<String>,
}

impl InfoPopupView {
    fn render(record: &TaskRecord) -> Self {
        let title = if record.task.trim().is_empty() {
            "Task".to_string()
        } else {
            record.task.clone()
        };

        let description = non_blank(record.description.as_deref());
        let due_date = non_blank(record.due_date.as_deref());
        let lines = if description.is_none() && due_date.is_none() {
            vec![NO_DATA_MESSAGE.to_string()]
        } else {
            description
                .map(|value| format!("Description: {value}"))
                .into_iter()
                .chain(due_date.map(|value| format!("Due Date: {value}")))
                .collect()
        };

        Self {
            visible: true,
            backdrop_visible: true,
            title,
            lines,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    rows: Vec<TaskRow>,
    pending: usize,
    popup: InfoPopupView,
}

impl TaskBoard {
    pub fn new(records: Vec<TaskRecord>) -> Self {
        let rows = records
            .into_iter()
            .map(|record| TaskRow {
                record,
                completed: false,
            })
            .collect();
        let mut board = Self {
            rows,
            pending: 0,
            popup: InfoPopupView::default(),
        };
        board.recount();
        board
    }

    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    pub fn pending_count(&self) -> usize {
        self.pending
    }

    /// Checkbox change handler. Returns the new pending count, or `None` for
    /// an unknown task.
    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> Option<usize> {
        let row = self.rows.iter_mut().find(|row| row.record.id == id)?;
        row.completed = completed;
        self.recount();
        Some(self.pending)
    }

    pub fn toggle(&mut self, id: TaskId) -> Option<usize> {
        let completed = self.rows.iter().find(|row| row.record.id == id)?.completed;
        self.set_completed(id, !completed)
    }

    fn recount(&mut self) {
        let completed = self.rows.iter().filter(|row| row.completed).count();
        self.pending = self.rows.len() - completed;
    }

    pub fn open_info(&mut self, id: TaskId) -> Option<&InfoPopupView> {
        let row = self.rows.iter().find(|row| row.record.id == id)?;
        self.popup = InfoPopupView::render(&row.record);
        Some(&self.popup)
    }

    /// Close button and backdrop click both land here.
    pub fn close_info(&mut self) {
        self.popup.visible = false;
        self.popup.backdrop_visible = false;
    }

    pub fn popup(&self) -> &InfoPopupView {
        &self.popup
    }
}

#[cfg(test)]
#[path = "tests/tasks_tests.rs"]
mod tests;
