pub mod company_profile;
pub mod customer;
pub mod invoice;
