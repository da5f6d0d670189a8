//! Identifier newtypes for the domain entities.
//!
//! Every entity the engine touches is addressed by a distinct ID type so a
//! `UserId` can never be passed where a `SectionId` is expected.

use crate::define_id_type;

define_id_type!(i64, UserId);
define_id_type!(i64, CourseId);
define_id_type!(i64, SectionId);
define_id_type!(i64, ScheduleId);
