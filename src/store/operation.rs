//! Action kinds and their busy flags

use std::fmt;

/// One kind of store action. Each has an independent busy flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchSongs,
    CreateUser,
    UpdateUserStatus,
    AddSongToUser,
    CreateSong,
    FetchUser,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::FetchSongs,
        Operation::CreateUser,
        Operation::UpdateUserStatus,
        Operation::AddSongToUser,
        Operation::CreateSong,
        Operation::FetchUser,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::FetchSongs => "fetch_songs",
            Operation::CreateUser => "create_user",
            Operation::UpdateUserStatus => "update_user_status",
            Operation::AddSongToUser => "add_song_to_user",
            Operation::CreateSong => "create_song",
            Operation::FetchUser => "fetch_user",
        }
    }

    fn index(&self) -> usize {
        match self {
            Operation::FetchSongs => 0,
            Operation::CreateUser => 1,
            Operation::UpdateUserStatus => 2,
            Operation::AddSongToUser => 3,
            Operation::CreateSong => 4,
            Operation::FetchUser => 5,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Busy flag per action kind, as shown to the UI
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperationLoading {
    pub fetching_songs: bool,
    pub creating_user: bool,
    pub updating_user_status: bool,
    pub adding_song_to_user: bool,
    pub creating_song: bool,
    pub fetching_user: bool,
}

impl OperationLoading {
    pub fn get(&self, op: Operation) -> bool {
        match op {
            Operation::FetchSongs => self.fetching_songs,
            Operation::CreateUser => self.creating_user,
            Operation::UpdateUserStatus => self.updating_user_status,
            Operation::AddSongToUser => self.adding_song_to_user,
            Operation::CreateSong => self.creating_song,
            Operation::FetchUser => self.fetching_user,
        }
    }

    pub fn any(&self) -> bool {
        Operation::ALL.iter().any(|op| self.get(*op))
    }
}

/// Outstanding calls per action kind.
///
/// Same-kind calls may overlap, so a flag reads true until the last of them
/// has finished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct InFlight([u32; 6]);

impl InFlight {
    pub(crate) fn begin(&mut self, op: Operation) {
        self.0[op.index()] += 1;
    }

    pub(crate) fn finish(&mut self, op: Operation) {
        let slot = &mut self.0[op.index()];
        *slot = slot.saturating_sub(1);
    }

    pub(crate) fn count(&self, op: Operation) -> u32 {
        self.0[op.index()]
    }

    pub(crate) fn flags(&self) -> OperationLoading {
        let busy = |op: Operation| self.count(op) > 0;
        OperationLoading {
            fetching_songs: busy(Operation::FetchSongs),
            creating_user: busy(Operation::CreateUser),
            updating_user_status: busy(Operation::UpdateUserStatus),
            adding_song_to_user: busy(Operation::AddSongToUser),
            creating_song: busy(Operation::CreateSong),
            fetching_user: busy(Operation::FetchUser),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_independent() {
        let mut in_flight = InFlight::default();
        in_flight.begin(Operation::CreateUser);

        let flags = in_flight.flags();
        assert!(flags.creating_user);
        assert!(flags.get(Operation::CreateUser));
        assert!(!flags.fetching_songs);
        assert!(flags.any());
    }

    #[test]
    fn test_overlapping_calls_keep_flag_set() {
        let mut in_flight = InFlight::default();
        in_flight.begin(Operation::FetchSongs);
        in_flight.begin(Operation::FetchSongs);
        in_flight.finish(Operation::FetchSongs);
        assert!(in_flight.flags().fetching_songs);

        in_flight.finish(Operation::FetchSongs);
        assert!(!in_flight.flags().fetching_songs);

        // Unbalanced finish never underflows
        in_flight.finish(Operation::FetchSongs);
        assert_eq!(in_flight.count(Operation::FetchSongs), 0);
        assert!(!in_flight.flags().any());
    }

    #[test]
    fn test_operation_names_unique() {
        let mut names: Vec<&str> = Operation::ALL.iter().map(|op| op.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Operation::ALL.len());
    }
}
