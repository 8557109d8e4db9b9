//! Test support for the report parser
//!
//! Shared fixtures used across the field-level and line-level parser tests.


/// A well-formed input covering both sections, blank lines included
///
/// Station 0 is fully covered by its chargers' up reports, station 1 has a
/// single down report, station 2 has an uncovered gap in the middle.
pub fn sample_input() -> &'static str {
    "[Stations]\n\
     0 1001 1002\n\
     1 1003\n\
     2 1004\n\
     \n\
     [Charger Availability Reports]\n\
     1001 0 50000 true\n\
     1001 50000 100000 true\n\
     1002 50000 100000 true\n\
     1003 25000 75000 false\n\
     1004 0 50000 true\n\
     1004 100000 200000 true\n"
}
