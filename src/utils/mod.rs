pub(crate) mod date;
pub(crate) mod timeago;
pub(crate) mod timezone;

pub(crate) use date::parse_date;
pub(crate) use timeago::time_ago;
pub(crate) use timezone::Timezone;
