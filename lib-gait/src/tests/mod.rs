mod actuation;
mod feedback;
