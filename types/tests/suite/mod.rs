mod equality;
mod state_document;
