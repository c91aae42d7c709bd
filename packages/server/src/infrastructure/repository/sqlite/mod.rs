mod room;

pub use room::SqliteRoomRepository;
