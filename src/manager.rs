/// One unit of work: a full row of the image.
#[derive(Debug, PartialEq)]
pub struct Task {
    pub row: u32,
}

/// Hands out rows to worker threads and tracks how many are finished.
#[derive(Debug)]
pub struct Manager {
    rows: u32,
    next_row: u32,
    completed: u32,
}

impl Manager {
    pub fn new(rows: u32) -> Self {
        Manager {
            rows,
            next_row: 0,
            completed: 0,
        }
    }

    pub fn next(&mut self) -> Option<Task> {
        if self.next_row < self.rows {
            let row = self.next_row;
            self.next_row += 1;
            Some(Task { row })
        } else {
            None
        }
    }

    /// Marks a row finished, returning the number of finished rows so far.
    pub fn complete(&mut self) -> u32 {
        self.completed += 1;
        self.completed
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn is_done(&self) -> bool {
        self.completed >= self.rows
    }
}
