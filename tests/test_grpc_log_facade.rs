use log_shims::{
    grpc::{GrpcLogger, LogFacade, SeverityLogger},
    grpc_error, LineLogger,
};
use std::{
    io::Write,
    sync::{Arc, Mutex},
};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);
impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_grpc_log_facade() {
    let buf = SharedBuf::default();
    LineLogger::builder(buf.clone())
        .timestamp(false)
        .max_level(log::LevelFilter::Trace)
        .start()
        .unwrap_or_else(|e| panic!("Logger initialization failed with {e}"));

    let grpc_logger = GrpcLogger::from_log_facade("DEBUG");
    assert!(grpc_logger.v(0));
    assert!(grpc_logger.v(1));
    assert!(!grpc_logger.v(2));

    grpc_logger.info(&[&"subchannel ", &3, &" picked"]);
    grpc_logger.warningln(&[&"retrying in ", &5, &"s"]);
    grpc_error!(grpc_logger, "stream {} reset", 17);
    grpc_logger.fatalf(format_args!("cannot bind {}", "[::]:50051"));

    let custom = GrpcLogger::new("NONE", LogFacade::with_target("transport"));
    assert!(!custom.v(0));
    custom.warning(&[&"keepalive ping failed"]);

    // a second logger can't be installed
    assert!(LineLogger::builder(Vec::<u8>::new()).start().is_err());

    let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert_eq!(
        written,
        "[TRACE] grpc: subchannel 3 picked\n\
         [WARN] grpc: retrying in 5s\n\
         [ERROR] grpc: stream 17 reset\n\
         [ERROR] grpc: cannot bind [::]:50051\n\
         [WARN] transport: keepalive ping failed\n"
    );
}
