mod id;

pub use id::SongId;
