/// Safe integer helpers.
///
/// This module holds the bounds of the numeric domain and the routines that
/// enforce them. Every literal and every binary result passes through these
/// checks so that values never silently wrap or lose precision.
///
/// All fallible functions return a `Result`, which is `Ok` if the value lies
/// in the safe integer range and an error otherwise.
pub mod num;
