
mod request;
mod robustness;
