pub mod filmwork;
