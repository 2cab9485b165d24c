pub mod logstats;
