mod calls;
mod errors;
mod functions;
