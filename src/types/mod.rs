mod district_id;
mod party;

pub use district_id::DistrictId;
pub use party::Party;
