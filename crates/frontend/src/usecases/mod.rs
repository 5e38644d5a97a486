pub mod u501_verify_request;
