//! The input seam between the classifiers and whatever supplies records.

/// A raw attendance record as it arrives from an access-control export.
///
/// This trait allows the classifiers to work with different record
/// representations (e.g., a spreadsheet row from att-cli, or test
/// fixtures). All fields are raw text; validation happens inside the
/// classifiers, which silently discard records that do not conform.
pub trait AttendanceRecord {
    /// Returns the personnel identifier, if present.
    ///
    /// This is the sole identity key: two records with the same id are
    /// always the same employee, regardless of the name field.
    fn personnel_id(&self) -> Option<&str>;

    /// Returns the employee display name, if present. Display-only.
    fn employee_name(&self) -> Option<&str>;

    /// Returns the raw timestamp text, if present.
    fn timestamp(&self) -> Option<&str>;

    /// Returns the raw device/location descriptor, if present.
    ///
    /// Direction is inferred from this text by substring match; see
    /// [`crate::Direction::classify`].
    fn device(&self) -> Option<&str>;
}
