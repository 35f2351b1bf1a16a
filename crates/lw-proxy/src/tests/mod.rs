mod body;
mod handler;
mod headers;
