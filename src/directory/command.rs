pub mod add_borrower_cmd;
