//! Error catalog of the staff module.

use canteen_errors::ErrDef;

pub const INVALID_ID: ErrDef = ErrDef {
    status: 400,
    title: "Bad Request",
    code: "STAFF_INVALID_ID",
    type_url: "https://errors.canteen.com/staff/invalid-id",
};

pub const VALIDATION: ErrDef = ErrDef {
    status: 400,
    title: "Bad Request",
    code: "STAFF_VALIDATION",
    type_url: "https://errors.canteen.com/staff/validation",
};

pub const WORKER_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Not Found",
    code: "STAFF_WORKER_NOT_FOUND",
    type_url: "https://errors.canteen.com/staff/worker-not-found",
};

pub const USER_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Not Found",
    code: "STAFF_USER_NOT_FOUND",
    type_url: "https://errors.canteen.com/staff/user-not-found",
};

pub const DAY_OFF_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Not Found",
    code: "STAFF_DAY_OFF_NOT_FOUND",
    type_url: "https://errors.canteen.com/staff/day-off-not-found",
};

pub const INVALID_CREDENTIALS: ErrDef = ErrDef {
    status: 401,
    title: "Unauthorized",
    code: "STAFF_INVALID_CREDENTIALS",
    type_url: "https://errors.canteen.com/staff/invalid-credentials",
};

pub const INTERNAL: ErrDef = ErrDef {
    status: 500,
    title: "Internal Server Error",
    code: "STAFF_INTERNAL",
    type_url: "https://errors.canteen.com/staff/internal",
};
