use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// 対話用の入出力
///
/// 入力は1行ずつ読み、出力は書き込みごとにflushする。
/// テストではバイト列とVecを渡して対話を再現できる。
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 1行読む（改行は取り除く）
    ///
    /// 入力が終わっている場合は `None` を返す。
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// `<label>: ` を表示して1行読む
    pub async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.write(&format!("{}: ", label)).await?;
        self.read_line().await
    }

    /// 改行なしで書き込む
    pub async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    /// 1行書き込む
    pub async fn say(&mut self, line: &str) -> io::Result<()> {
        self.write(&format!("{}\n", line)).await
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
