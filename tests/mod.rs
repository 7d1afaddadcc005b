mod support;

mod report_server;
