mod announcement;
mod binding;
