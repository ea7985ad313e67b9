pub mod register_voucher_form;
pub mod search_voucher_form;

pub use register_voucher_form::RegisterVoucherForm;
pub use search_voucher_form::SearchVoucherForm;
