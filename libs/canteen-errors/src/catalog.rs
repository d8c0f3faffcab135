//! Static error definitions shared by the modules' error catalogs

use crate::problem::Problem;
use http::StatusCode;

/// Static error definition from a module catalog
#[derive(Debug, Clone, Copy)]
pub struct ErrDef {
    pub status: u16,
    pub title: &'static str,
    pub code: &'static str,
    pub type_url: &'static str,
}

impl ErrDef {
    /// Convert this error definition into a Problem with the given detail
    #[inline]
    pub fn as_problem(&self, detail: impl Into<String>) -> Problem {
        // Invalid codes fall back to 500
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Problem::new(status, self.title, detail.into())
            .with_code(self.code)
            .with_type(self.type_url)
    }

    /// Same as [`ErrDef::as_problem`] plus request instance and trace id.
    pub fn with_context(
        &self,
        detail: impl Into<String>,
        instance: &str,
        trace_id: Option<String>,
    ) -> Problem {
        let problem = self.as_problem(detail).with_instance(instance);
        match trace_id {
            Some(tid) => problem.with_trace_id(tid),
            None => problem,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    const MENU_NOT_FOUND: ErrDef = ErrDef {
        status: 404,
        title: "Not Found",
        code: "MENU_NOT_FOUND",
        type_url: "https://errors.canteen.com/MENU_NOT_FOUND",
    };

    #[test]
    fn err_def_to_problem_works() {
        let problem = MENU_NOT_FOUND.as_problem("Menu missing");
        assert_eq!(problem.status, StatusCode::NOT_FOUND);
        assert_eq!(problem.title, "Not Found");
        assert_eq!(problem.detail, "Menu missing");
        assert_eq!(problem.code, "MENU_NOT_FOUND");
        assert_eq!(problem.type_url, "https://errors.canteen.com/MENU_NOT_FOUND");
    }

    #[test]
    fn with_context_sets_instance_and_trace() {
        let problem = MENU_NOT_FOUND.with_context("gone", "/menu/1", Some("42".to_owned()));
        assert_eq!(problem.instance, "/menu/1");
        assert_eq!(problem.trace_id.as_deref(), Some("42"));
    }

    #[test]
    fn invalid_status_falls_back_to_internal_error() {
        let def = ErrDef {
            status: 1000,
            ..MENU_NOT_FOUND
        };
        assert_eq!(def.as_problem("x").status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
